//! Fixed point budget for the compatibility score. The five positive
//! components sum to 100; the assignment penalty is a deduction on top, and
//! the final total is clamped back into [0, 100].

/// Flat credit for being in the candidate pool for the trade at all.
/// Candidacy is pre-filtered by trade, so this is always earned when a
/// breakdown is computed.
pub const TRADE_MATCH_POINTS: f64 = 25.0;

/// Ceiling for the skill-proficiency component.
pub const SKILL_POINTS: f64 = 25.0;

/// Ceiling for the certification-completeness component.
pub const CERTIFICATION_POINTS: f64 = 25.0;

/// Earned in full when the worker is available, zero otherwise.
pub const AVAILABILITY_POINTS: f64 = 15.0;

/// Ceiling for the experience ramp.
pub const EXPERIENCE_POINTS: f64 = 10.0;

/// Deduction applied when the worker already holds an assignment on the
/// project being matched against.
pub const ASSIGNED_PENALTY: f64 = -10.0;

/// Neutral fallback for the skill component: half the ceiling. Applied when
/// the trade defines zero skills or the trade never resolved to the
/// ontology, so an incomplete ontology does not zero out every candidate.
pub const NEUTRAL_SKILL_POINTS: f64 = SKILL_POINTS / 2.0;

/// Neutral fallback for the certification component, same rationale.
pub const NEUTRAL_CERTIFICATION_POINTS: f64 = CERTIFICATION_POINTS / 2.0;

/// Years of experience at which the experience ramp saturates.
pub const EXPERIENCE_CAP_YEARS: f64 = 15.0;

/// Bounds for the clamped total.
pub const MIN_TOTAL: f64 = 0.0;
pub const MAX_TOTAL: f64 = 100.0;
