use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier for a canonical ontology trade.
    TradeId
);
string_id!(
    /// Identifier for a skill within a trade's ontology.
    SkillId
);
string_id!(
    /// Identifier for a certification definition.
    CertificationId
);
string_id!(
    /// Identifier for a worker record.
    WorkerId
);
string_id!(
    /// Identifier for a project record.
    ProjectId
);

/// Canonical occupation category in the ontology. Seeded once and treated as
/// immutable while matching runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A competency belonging to exactly one trade. The difficulty level is
/// contextual detail for callers, not a scoring multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub trade_id: TradeId,
    pub name: String,
    pub difficulty_level: u8,
}

/// A credential definition. `validity_years` of `None` means the credential
/// never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: CertificationId,
    pub name: String,
    pub issuing_body: String,
    pub validity_years: Option<u8>,
}

/// Many-to-many link marking a certification as required for a trade. An
/// empty link list is a valid state (the trade has no formal requirements),
/// distinct from "data unavailable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeCertification {
    pub trade_id: TradeId,
    pub certification_id: CertificationId,
}

/// A candidate professional. The `trade` field is the free-text label stored
/// on the worker record; it may not map to any ontology trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub trade: String,
    pub experience_years: u32,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Association of a worker to a skill with a proficiency level (1-5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSkill {
    pub worker_id: WorkerId,
    pub skill_id: SkillId,
    pub proficiency: u8,
}

/// Association of a worker to a certification. `expires_on` of `None` means
/// the held credential never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCertification {
    pub worker_id: WorkerId,
    pub certification_id: CertificationId,
    pub earned_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
}

/// Lifecycle status of a project. Only active projects are candidates in the
/// jobs-for-worker direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on_hold",
        }
    }
}

/// A job site with the canonical trade names it still needs staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    pub needed_trades: Vec<String>,
}

/// Crew role held on an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRole {
    Foreman,
    Lead,
    Crew,
}

/// Worker-to-project link. Existence of a record means the worker is
/// currently assigned; matching uses it only as a scoring penalty, never as
/// a hard exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    pub project_id: ProjectId,
    pub worker_id: WorkerId,
    pub role: AssignmentRole,
}
