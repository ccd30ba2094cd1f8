use std::sync::Arc;

use chrono::NaiveDate;

use crate::matching::domain::{
    AssignmentRole, Certification, CertificationId, Project, ProjectAssignment, ProjectId,
    ProjectStatus, Skill, SkillId, Trade, TradeCertification, TradeId, Worker,
    WorkerCertification, WorkerId, WorkerSkill,
};
use crate::matching::service::MatchingService;
use crate::matching::store::{OntologyStore, StoreError};

/// Fixed scoring date so certification expiry is deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) trades: Vec<Trade>,
    pub(super) skills: Vec<Skill>,
    pub(super) certifications: Vec<Certification>,
    pub(super) trade_certifications: Vec<TradeCertification>,
    pub(super) workers: Vec<Worker>,
    pub(super) worker_skills: Vec<WorkerSkill>,
    pub(super) worker_certifications: Vec<WorkerCertification>,
    pub(super) projects: Vec<Project>,
    pub(super) assignments: Vec<ProjectAssignment>,
}

impl OntologyStore for MemoryStore {
    fn project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.iter().find(|p| &p.id == id).cloned())
    }

    fn worker(&self, id: &WorkerId) -> Result<Option<Worker>, StoreError> {
        Ok(self.workers.iter().find(|w| &w.id == id).cloned())
    }

    fn trade_by_name(&self, canonical_name: &str) -> Result<Option<Trade>, StoreError> {
        Ok(self
            .trades
            .iter()
            .find(|t| t.name == canonical_name)
            .cloned())
    }

    fn skills_by_trade(&self, trade_id: &TradeId) -> Result<Vec<Skill>, StoreError> {
        Ok(self
            .skills
            .iter()
            .filter(|s| &s.trade_id == trade_id)
            .cloned()
            .collect())
    }

    fn certifications_by_trade(
        &self,
        trade_id: &TradeId,
    ) -> Result<Vec<TradeCertification>, StoreError> {
        Ok(self
            .trade_certifications
            .iter()
            .filter(|link| &link.trade_id == trade_id)
            .cloned()
            .collect())
    }

    fn workers_by_trade_label(&self, label: &str) -> Result<Vec<Worker>, StoreError> {
        Ok(self
            .workers
            .iter()
            .filter(|w| w.trade == label)
            .cloned()
            .collect())
    }

    fn worker_skills(&self, worker_id: &WorkerId) -> Result<Vec<WorkerSkill>, StoreError> {
        Ok(self
            .worker_skills
            .iter()
            .filter(|ws| &ws.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn worker_certifications(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<WorkerCertification>, StoreError> {
        Ok(self
            .worker_certifications
            .iter()
            .filter(|wc| &wc.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn assignments_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectAssignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| &a.project_id == project_id)
            .cloned()
            .collect())
    }

    fn assignments_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<ProjectAssignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| &a.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn active_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .cloned()
            .collect())
    }
}

/// Every operation fails, for infrastructure-fault propagation tests.
pub(super) struct OfflineStore;

impl OntologyStore for OfflineStore {
    fn project(&self, _id: &ProjectId) -> Result<Option<Project>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn worker(&self, _id: &WorkerId) -> Result<Option<Worker>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn trade_by_name(&self, _canonical_name: &str) -> Result<Option<Trade>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn skills_by_trade(&self, _trade_id: &TradeId) -> Result<Vec<Skill>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn certifications_by_trade(
        &self,
        _trade_id: &TradeId,
    ) -> Result<Vec<TradeCertification>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn workers_by_trade_label(&self, _label: &str) -> Result<Vec<Worker>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn worker_skills(&self, _worker_id: &WorkerId) -> Result<Vec<WorkerSkill>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn worker_certifications(
        &self,
        _worker_id: &WorkerId,
    ) -> Result<Vec<WorkerCertification>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn assignments_by_project(
        &self,
        _project_id: &ProjectId,
    ) -> Result<Vec<ProjectAssignment>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn assignments_by_worker(
        &self,
        _worker_id: &WorkerId,
    ) -> Result<Vec<ProjectAssignment>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn active_projects(&self) -> Result<Vec<Project>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn worker(id: &str, trade: &str, experience_years: u32, available: bool) -> Worker {
    Worker {
        id: WorkerId::from(id),
        name: format!("Worker {id}"),
        trade: trade.to_string(),
        experience_years,
        available,
        email: None,
        bio: None,
    }
}

pub(super) fn project(id: &str, status: ProjectStatus, needed_trades: &[&str]) -> Project {
    Project {
        id: ProjectId::from(id),
        name: format!("Site {id}"),
        status,
        needed_trades: needed_trades.iter().map(|t| t.to_string()).collect(),
    }
}

pub(super) fn trade(id: &str, name: &str) -> Trade {
    Trade {
        id: TradeId::from(id),
        name: name.to_string(),
        category: "Construction".to_string(),
        description: format!("{name} work on data-center sites"),
    }
}

pub(super) fn skill(id: &str, trade_id: &str, name: &str) -> Skill {
    Skill {
        id: SkillId::from(id),
        trade_id: TradeId::from(trade_id),
        name: name.to_string(),
        difficulty_level: 3,
    }
}

pub(super) fn certification(id: &str, name: &str, validity_years: Option<u8>) -> Certification {
    Certification {
        id: CertificationId::from(id),
        name: name.to_string(),
        issuing_body: "NCCER".to_string(),
        validity_years,
    }
}

pub(super) fn cert_link(trade_id: &str, certification_id: &str) -> TradeCertification {
    TradeCertification {
        trade_id: TradeId::from(trade_id),
        certification_id: CertificationId::from(certification_id),
    }
}

pub(super) fn worker_skill(worker_id: &str, skill_id: &str, proficiency: u8) -> WorkerSkill {
    WorkerSkill {
        worker_id: WorkerId::from(worker_id),
        skill_id: SkillId::from(skill_id),
        proficiency,
    }
}

pub(super) fn worker_certification(
    worker_id: &str,
    certification_id: &str,
    expires_on: Option<NaiveDate>,
) -> WorkerCertification {
    WorkerCertification {
        worker_id: WorkerId::from(worker_id),
        certification_id: CertificationId::from(certification_id),
        earned_on: NaiveDate::from_ymd_opt(2022, 1, 10).expect("valid date"),
        expires_on,
    }
}

pub(super) fn assignment(project_id: &str, worker_id: &str) -> ProjectAssignment {
    ProjectAssignment {
        project_id: ProjectId::from(project_id),
        worker_id: WorkerId::from(worker_id),
        role: AssignmentRole::Crew,
    }
}

/// One active project needing an Electrician whose ontology trade exists but
/// defines no skills and no certifications, plus a single seasoned,
/// available electrician. Expected breakdown per candidate: 25 trade + 12.5
/// skills + 12.5 certs + 15 availability + 10 experience = 75.
pub(super) fn bare_electrician_store() -> MemoryStore {
    MemoryStore {
        trades: vec![trade("trade-elec", "Electrician")],
        workers: vec![worker("w-elec", "Electrician", 20, true)],
        projects: vec![project("p-dc1", ProjectStatus::Active, &["Electrician"])],
        ..MemoryStore::default()
    }
}

pub(super) fn build_service(store: MemoryStore) -> (MatchingService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(store);
    (MatchingService::new(store.clone()), store)
}
