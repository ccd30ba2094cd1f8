//! Pure scoring of a single (worker, trade-context) pair: six weighted
//! components combined into a bounded, explainable total. No I/O and no
//! clock reads; the scoring date is an explicit input, so a breakdown is
//! deterministic given its inputs.

mod rules;
pub mod weights;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cache::TradeOntology;
use super::domain::{WorkerCertification, WorkerSkill};

/// The six sub-scores and their clamped sum. All values are rounded to two
/// decimals for presentation; callers display the full breakdown, never just
/// the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub trade_match: f64,
    pub skill_proficiency: f64,
    pub certification_completeness: f64,
    pub availability: f64,
    pub experience: f64,
    pub assignment_penalty: f64,
    pub total: f64,
}

/// Explainability counts for the skill component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchDetail {
    pub trade_skill_count: usize,
    pub matched_skill_count: usize,
    pub average_proficiency: f64,
}

/// Explainability counts for the certification component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationMatchDetail {
    pub required_count: usize,
    pub valid_count: usize,
    pub expired_count: usize,
    pub missing_count: usize,
}

/// Skill and certification sub-scores for one worker against one trade's
/// ontology. These do not vary per candidate project, so the jobs-for-worker
/// direction computes them once and reuses them across the whole pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeFit {
    pub skill_points: f64,
    pub skills: SkillMatchDetail,
    pub certification_points: f64,
    pub certifications: CertificationMatchDetail,
}

/// Score a worker's skills and certifications against a trade's ontology.
///
/// `None` means the trade never resolved to an ontology entry; that case and
/// an ontology with empty skill/certification sets both fall back to the
/// neutral midpoints. The two conditions are deliberately merged so trades
/// with an incomplete ontology do not zero out every candidate.
pub fn trade_fit(
    ontology: Option<&TradeOntology>,
    worker_skills: &[WorkerSkill],
    worker_certifications: &[WorkerCertification],
    today: NaiveDate,
) -> TradeFit {
    let (skill_points, skills) = match ontology {
        Some(ontology) => rules::skill_proficiency(&ontology.skills, worker_skills),
        None => rules::skill_proficiency(&[], worker_skills),
    };

    let (certification_points, certifications) = match ontology {
        Some(ontology) => rules::certification_completeness(
            &ontology.certification_links,
            worker_certifications,
            today,
        ),
        None => rules::certification_completeness(&[], worker_certifications, today),
    };

    TradeFit {
        skill_points,
        skills,
        certification_points,
        certifications,
    }
}

/// Compose the full six-component breakdown from a precomputed trade fit and
/// the worker's availability, experience, and assignment state.
pub fn breakdown(
    fit: &TradeFit,
    available: bool,
    experience_years: u32,
    already_assigned: bool,
) -> ScoreBreakdown {
    let trade_match = weights::TRADE_MATCH_POINTS;
    let skill_proficiency = fit.skill_points;
    let certification_completeness = fit.certification_points;
    let availability = rules::availability(available);
    let experience = rules::experience(experience_years);
    let assignment_penalty = rules::assignment_penalty(already_assigned);

    let total = (trade_match
        + skill_proficiency
        + certification_completeness
        + availability
        + experience
        + assignment_penalty)
        .clamp(weights::MIN_TOTAL, weights::MAX_TOTAL);

    ScoreBreakdown {
        trade_match: round2(trade_match),
        skill_proficiency: round2(skill_proficiency),
        certification_completeness: round2(certification_completeness),
        availability: round2(availability),
        experience: round2(experience),
        assignment_penalty: round2(assignment_penalty),
        total: round2(total),
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
