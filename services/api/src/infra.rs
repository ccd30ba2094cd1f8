use chrono::NaiveDate;
use crewmatch::matching::domain::{
    AssignmentRole, Certification, CertificationId, Project, ProjectAssignment, ProjectId,
    ProjectStatus, Skill, SkillId, Trade, TradeCertification, TradeId, Worker,
    WorkerCertification, WorkerId, WorkerSkill,
};
use crewmatch::matching::store::{OntologyStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only ontology snapshot. The matching pipeline never mutates the
/// store, so plain vectors behind an `Arc` are enough.
#[derive(Default, Clone)]
pub(crate) struct InMemoryOntologyStore {
    pub(crate) trades: Vec<Trade>,
    pub(crate) skills: Vec<Skill>,
    pub(crate) certifications: Vec<Certification>,
    pub(crate) trade_certifications: Vec<TradeCertification>,
    pub(crate) workers: Vec<Worker>,
    pub(crate) worker_skills: Vec<WorkerSkill>,
    pub(crate) worker_certifications: Vec<WorkerCertification>,
    pub(crate) projects: Vec<Project>,
    pub(crate) assignments: Vec<ProjectAssignment>,
}

impl OntologyStore for InMemoryOntologyStore {
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

/// Sample campus used by the default server and the CLI demo: three ontology
/// trades, a crew pool that exercises the alias table, an expired welding
/// card, and one existing assignment.
pub(crate) fn sample_store() -> InMemoryOntologyStore {
    InMemoryOntologyStore {
        trades: vec![
            trade(
                "trade-elec",
                "Electrician",
                "Electrical",
                "Medium-voltage distribution, switchgear, and UPS rooms",
            ),
            trade(
                "trade-pipe",
                "Plumber/Pipefitter",
                "Mechanical",
                "Chilled water loops and process piping",
            ),
            trade(
                "trade-hvac",
                "HVAC Technician",
                "Mechanical",
                "CRAH units, air handling, and controls",
            ),
        ],
        skills: vec![
            skill("s-conduit", "trade-elec", "Conduit bending", 2),
            skill("s-tray", "trade-elec", "Cable tray installation", 2),
            skill("s-switchgear", "trade-elec", "Switchgear termination", 4),
            skill("s-grounding", "trade-elec", "Grounding and bonding", 3),
            skill("s-weld", "trade-pipe", "Socket welding", 4),
            skill("s-brazing", "trade-pipe", "Copper brazing", 3),
            skill("s-victaulic", "trade-pipe", "Grooved coupling assembly", 2),
            skill("s-crah", "trade-hvac", "CRAH commissioning", 4),
            skill("s-controls", "trade-hvac", "BMS controls wiring", 3),
        ],
        certifications: vec![
            certification("c-osha30", "OSHA 30", "OSHA", None),
            certification("c-nfpa70e", "NFPA 70E", "NFPA", Some(3)),
            certification("c-weld6g", "6G Pipe Welding", "AWS", Some(2)),
            certification("c-epa608", "EPA 608 Universal", "EPA", None),
        ],
        trade_certifications: vec![
            cert_link("trade-elec", "c-osha30"),
            cert_link("trade-elec", "c-nfpa70e"),
            cert_link("trade-pipe", "c-osha30"),
            cert_link("trade-pipe", "c-weld6g"),
            cert_link("trade-hvac", "c-epa608"),
        ],
        workers: vec![
            worker("w-ramirez", "Electrician", 14, true),
            worker("w-okafor", "Electrician", 6, true),
            worker("w-chen", "Electrician", 2, false),
            worker("w-silva", "Pipefitter", 11, true),
            worker("w-novak", "Plumber", 4, true),
            worker("w-petit", "HVAC Mechanic", 9, true),
        ],
        worker_skills: vec![
            worker_skill("w-ramirez", "s-conduit", 5),
            worker_skill("w-ramirez", "s-switchgear", 4),
            worker_skill("w-ramirez", "s-grounding", 4),
            worker_skill("w-okafor", "s-conduit", 4),
            worker_skill("w-okafor", "s-tray", 3),
            worker_skill("w-chen", "s-conduit", 2),
            worker_skill("w-silva", "s-weld", 5),
            worker_skill("w-silva", "s-victaulic", 4),
            worker_skill("w-novak", "s-brazing", 3),
            worker_skill("w-petit", "s-crah", 4),
            worker_skill("w-petit", "s-controls", 3),
        ],
        worker_certifications: vec![
            worker_certification("w-ramirez", "c-osha30", date(2023, 3, 1), None),
            worker_certification(
                "w-ramirez",
                "c-nfpa70e",
                date(2023, 3, 1),
                Some(date(2026, 3, 1)),
            ),
            worker_certification("w-okafor", "c-osha30", date(2022, 7, 15), None),
            worker_certification("w-silva", "c-osha30", date(2021, 9, 9), None),
            // Expired welding card: half credit until renewed.
            worker_certification(
                "w-silva",
                "c-weld6g",
                date(2022, 4, 20),
                Some(date(2024, 4, 20)),
            ),
            worker_certification("w-petit", "c-epa608", date(2020, 1, 30), None),
        ],
        projects: vec![
            Project {
                id: ProjectId::from("p-dh-east"),
                name: "Data Hall East".to_string(),
                status: ProjectStatus::Active,
                needed_trades: vec![
                    "Electrician".to_string(),
                    "Plumber/Pipefitter".to_string(),
                ],
            },
            Project {
                id: ProjectId::from("p-dh-west"),
                name: "Data Hall West".to_string(),
                status: ProjectStatus::Active,
                needed_trades: vec![
                    "Electrician".to_string(),
                    "HVAC Technician".to_string(),
                ],
            },
            Project {
                id: ProjectId::from("p-substation"),
                name: "Substation Expansion".to_string(),
                status: ProjectStatus::Planning,
                needed_trades: vec!["Electrician".to_string()],
            },
        ],
        assignments: vec![ProjectAssignment {
            project_id: ProjectId::from("p-dh-east"),
            worker_id: WorkerId::from("w-ramirez"),
            role: AssignmentRole::Lead,
        }],
    }
}

fn trade(id: &str, name: &str, category: &str, description: &str) -> Trade {
    Trade {
        id: TradeId::from(id),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}

fn skill(id: &str, trade_id: &str, name: &str, difficulty_level: u8) -> Skill {
    Skill {
        id: SkillId::from(id),
        trade_id: TradeId::from(trade_id),
        name: name.to_string(),
        difficulty_level,
    }
}

fn certification(id: &str, name: &str, issuing_body: &str, validity_years: Option<u8>) -> Certification {
    Certification {
        id: CertificationId::from(id),
        name: name.to_string(),
        issuing_body: issuing_body.to_string(),
        validity_years,
    }
}

fn cert_link(trade_id: &str, certification_id: &str) -> TradeCertification {
    TradeCertification {
        trade_id: TradeId::from(trade_id),
        certification_id: CertificationId::from(certification_id),
    }
}

fn worker(id: &str, trade: &str, experience_years: u32, available: bool) -> Worker {
    let name = id.trim_start_matches("w-");
    Worker {
        id: WorkerId::from(id),
        name: format!("{}{}", name[..1].to_uppercase(), &name[1..]),
        trade: trade.to_string(),
        experience_years,
        available,
        email: Some(format!("{name}@example.test")),
        bio: None,
    }
}

fn worker_skill(worker_id: &str, skill_id: &str, proficiency: u8) -> WorkerSkill {
    WorkerSkill {
        worker_id: WorkerId::from(worker_id),
        skill_id: SkillId::from(skill_id),
        proficiency,
    }
}

fn worker_certification(
    worker_id: &str,
    certification_id: &str,
    earned_on: NaiveDate,
    expires_on: Option<NaiveDate>,
) -> WorkerCertification {
    WorkerCertification {
        worker_id: WorkerId::from(worker_id),
        certification_id: CertificationId::from(certification_id),
        earned_on,
        expires_on,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
