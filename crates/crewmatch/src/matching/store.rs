use super::domain::{
    Project, ProjectAssignment, ProjectId, Skill, Trade, TradeCertification, TradeId, Worker,
    WorkerCertification, WorkerId, WorkerSkill,
};

/// Read-only seam to the ontology and persistence collaborator so the
/// matching engine can be exercised in isolation.
///
/// Root-entity lookups return `Option`; absence is a caller-facing
/// condition, not an infrastructure fault. Every other failure surfaces as
/// [`StoreError`] and aborts the matching run; there is no partial or
/// degraded ontology state.
pub trait OntologyStore: Send + Sync {
    fn project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;
    fn worker(&self, id: &WorkerId) -> Result<Option<Worker>, StoreError>;
    fn trade_by_name(&self, canonical_name: &str) -> Result<Option<Trade>, StoreError>;
    fn skills_by_trade(&self, trade_id: &TradeId) -> Result<Vec<Skill>, StoreError>;
    fn certifications_by_trade(
        &self,
        trade_id: &TradeId,
    ) -> Result<Vec<TradeCertification>, StoreError>;
    /// Exact string match against the free-text worker trade label.
    fn workers_by_trade_label(&self, label: &str) -> Result<Vec<Worker>, StoreError>;
    fn worker_skills(&self, worker_id: &WorkerId) -> Result<Vec<WorkerSkill>, StoreError>;
    fn worker_certifications(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<WorkerCertification>, StoreError>;
    fn assignments_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectAssignment>, StoreError>;
    fn assignments_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<ProjectAssignment>, StoreError>;
    /// Projects with status `active` only.
    fn active_projects(&self) -> Result<Vec<Project>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("ontology store unavailable: {0}")]
    Unavailable(String),
}
