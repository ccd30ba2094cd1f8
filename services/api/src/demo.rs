use crate::infra::{parse_date, sample_store};
use chrono::{Local, NaiveDate};
use clap::Args;
use crewmatch::error::AppError;
use crewmatch::matching::domain::{ProjectId, WorkerId};
use crewmatch::matching::scoring::ScoreBreakdown;
use crewmatch::matching::service::MatchingService;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Project to staff (defaults to the sample campus's Data Hall East)
    #[arg(long, default_value = "p-dh-east")]
    pub(crate) project: String,
    /// Worker to place (defaults to the sample campus's pipefitter)
    #[arg(long, default_value = "w-silva")]
    pub(crate) worker: String,
    /// Scoring date for certification expiry (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        project,
        worker,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = MatchingService::new(Arc::new(sample_store()));

    println!("Crew matching demo (scoring date {today})");

    let project_id = ProjectId::from(project.as_str());
    let candidates = service.find_workers_for_project_on(&project_id, today)?;
    println!("\nCandidates for project {project}");
    if candidates.is_empty() {
        println!("  (no candidates found)");
    }
    for (rank, result) in candidates.iter().enumerate() {
        println!(
            "  {:>2}. {:<12} {:<22} total {:>6.2}{}",
            rank + 1,
            result.worker.name,
            format!("({})", result.matched_trade),
            result.score.total,
            if result.already_assigned {
                "  [already assigned]"
            } else {
                ""
            }
        );
        render_breakdown(&result.score);
    }

    let worker_id = WorkerId::from(worker.as_str());
    let openings = service.find_jobs_for_worker_on(&worker_id, today)?;
    println!("\nOpenings for worker {worker}");
    if openings.is_empty() {
        println!("  (no active projects need this trade)");
    }
    for (rank, result) in openings.iter().enumerate() {
        println!(
            "  {:>2}. {:<22} {:<22} total {:>6.2}{}",
            rank + 1,
            result.project.name,
            format!("({})", result.matched_trade),
            result.score.total,
            if result.already_assigned {
                "  [already assigned]"
            } else {
                ""
            }
        );
        render_breakdown(&result.score);
    }

    Ok(())
}

fn render_breakdown(score: &ScoreBreakdown) {
    println!(
        "      trade {:.1} | skills {:.2} | certs {:.2} | availability {:.1} | experience {:.2} | penalty {:.1}",
        score.trade_match,
        score.skill_proficiency,
        score.certification_completeness,
        score.availability,
        score.experience,
        score.assignment_penalty
    );
}
