//! Worker-project matching engine.
//!
//! Given a project's needed trades (or a worker's trade), candidates are
//! ranked by a multi-factor compatibility score over the trade ontology:
//! trade alignment, skill proficiency, certification validity, availability,
//! experience, and an existing-assignment penalty. The engine is a pure
//! read/compute/return pipeline over the [`store::OntologyStore`] seam; it
//! produces a ranked top-N shortlist, not an optimal assignment.

pub mod cache;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod trades;

#[cfg(test)]
mod tests;

pub use cache::{OntologyCache, TradeOntology};
pub use domain::{
    AssignmentRole, Certification, CertificationId, Project, ProjectAssignment, ProjectId,
    ProjectStatus, Skill, SkillId, Trade, TradeCertification, TradeId, Worker,
    WorkerCertification, WorkerId, WorkerSkill,
};
pub use router::matching_router;
pub use scoring::{
    breakdown, trade_fit, CertificationMatchDetail, ScoreBreakdown, SkillMatchDetail, TradeFit,
};
pub use service::{
    MatchError, MatchingService, ProjectMatchResult, WorkerMatchResult, SHORTLIST_LIMIT,
};
pub use store::{OntologyStore, StoreError};
pub use trades::{resolve_to_ontology, resolve_to_worker_labels};
