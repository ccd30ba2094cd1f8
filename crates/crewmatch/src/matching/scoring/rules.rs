use std::collections::HashSet;

use chrono::NaiveDate;

use super::weights;
use super::{round2, CertificationMatchDetail, SkillMatchDetail};
use crate::matching::domain::{Skill, TradeCertification, WorkerCertification, WorkerSkill};

/// Proficiency scale ceiling; levels are defined on 1-5.
const MAX_PROFICIENCY: u8 = 5;

/// Skill-proficiency points plus the explainability counts. A trade with
/// zero defined skills earns the neutral midpoint regardless of what the
/// worker holds; only skills intersecting the trade's set contribute.
pub(crate) fn skill_proficiency(
    trade_skills: &[Skill],
    worker_skills: &[WorkerSkill],
) -> (f64, SkillMatchDetail) {
    let trade_skill_count = trade_skills.len();
    if trade_skill_count == 0 {
        return (
            weights::NEUTRAL_SKILL_POINTS,
            SkillMatchDetail {
                trade_skill_count: 0,
                matched_skill_count: 0,
                average_proficiency: 0.0,
            },
        );
    }

    let trade_skill_ids: HashSet<_> = trade_skills.iter().map(|skill| &skill.id).collect();
    let mut matched = 0usize;
    let mut proficiency_sum = 0u32;
    for worker_skill in worker_skills {
        if trade_skill_ids.contains(&worker_skill.skill_id) {
            matched += 1;
            proficiency_sum += u32::from(worker_skill.proficiency.min(MAX_PROFICIENCY));
        }
    }

    let ratio = f64::from(proficiency_sum)
        / (trade_skill_count as f64 * f64::from(MAX_PROFICIENCY));
    let points = (ratio * weights::SKILL_POINTS).min(weights::SKILL_POINTS);

    let average_proficiency = if matched == 0 {
        0.0
    } else {
        round2(f64::from(proficiency_sum) / matched as f64)
    };

    (
        points,
        SkillMatchDetail {
            trade_skill_count,
            matched_skill_count: matched,
            average_proficiency,
        },
    )
}

/// Certification-completeness points plus the valid/expired/missing counts.
/// Each required certification contributes 1.0 credit when held and
/// unexpired, 0.5 when held but expired, 0 when not held. A trade with zero
/// required certifications earns the neutral midpoint.
pub(crate) fn certification_completeness(
    required: &[TradeCertification],
    worker_certifications: &[WorkerCertification],
    today: NaiveDate,
) -> (f64, CertificationMatchDetail) {
    let required_count = required.len();
    if required_count == 0 {
        return (
            weights::NEUTRAL_CERTIFICATION_POINTS,
            CertificationMatchDetail {
                required_count: 0,
                valid_count: 0,
                expired_count: 0,
                missing_count: 0,
            },
        );
    }

    let mut credits = 0.0f64;
    let mut valid_count = 0usize;
    let mut expired_count = 0usize;
    let mut missing_count = 0usize;

    for link in required {
        let held: Vec<_> = worker_certifications
            .iter()
            .filter(|cert| cert.certification_id == link.certification_id)
            .collect();

        if held.is_empty() {
            missing_count += 1;
        } else if held
            .iter()
            .any(|cert| cert.expires_on.map_or(true, |expiry| expiry >= today))
        {
            valid_count += 1;
            credits += 1.0;
        } else {
            expired_count += 1;
            credits += 0.5;
        }
    }

    let points =
        (credits / required_count as f64 * weights::CERTIFICATION_POINTS)
            .min(weights::CERTIFICATION_POINTS);

    (
        points,
        CertificationMatchDetail {
            required_count,
            valid_count,
            expired_count,
            missing_count,
        },
    )
}

/// All-or-nothing availability credit.
pub(crate) fn availability(available: bool) -> f64 {
    if available {
        weights::AVAILABILITY_POINTS
    } else {
        0.0
    }
}

/// Linear ramp over years of experience, saturating at the cap.
pub(crate) fn experience(experience_years: u32) -> f64 {
    let capped = f64::from(experience_years).min(weights::EXPERIENCE_CAP_YEARS);
    capped / weights::EXPERIENCE_CAP_YEARS * weights::EXPERIENCE_POINTS
}

/// Deduction for workers already assigned to the target project.
pub(crate) fn assignment_penalty(already_assigned: bool) -> f64 {
    if already_assigned {
        weights::ASSIGNED_PENALTY
    } else {
        0.0
    }
}
