use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cache::OntologyCache;
use super::domain::{Project, ProjectId, Worker, WorkerId};
use super::scoring::{
    breakdown, trade_fit, CertificationMatchDetail, ScoreBreakdown, SkillMatchDetail,
};
use super::store::{OntologyStore, StoreError};
use super::trades::{resolve_to_ontology, resolve_to_worker_labels};

/// Shortlist size for both matching directions. Fixed by design; there is no
/// pagination.
pub const SHORTLIST_LIMIT: usize = 10;

/// A scored worker candidate for one of a project's needed trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerMatchResult {
    pub worker: Worker,
    pub matched_trade: String,
    pub already_assigned: bool,
    pub score: ScoreBreakdown,
    pub skills: SkillMatchDetail,
    pub certifications: CertificationMatchDetail,
}

/// A scored project opening for a worker's trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMatchResult {
    pub project: Project,
    pub matched_trade: String,
    pub already_assigned: bool,
    pub score: ScoreBreakdown,
    pub skills: SkillMatchDetail,
    pub certifications: CertificationMatchDetail,
}

/// Error raised by the matching orchestrator. Missing root entities are the
/// only caller-facing typed conditions; store failures abort the run.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    #[error("worker {0} not found")]
    WorkerNotFound(WorkerId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrator for the two matching directions. Strictly read-then-compute:
/// it never writes to the store, holds no cross-call state, and builds a
/// fresh ontology cache per call, so concurrent matching runs are
/// independent.
pub struct MatchingService<S> {
    store: Arc<S>,
}

impl<S> MatchingService<S>
where
    S: OntologyStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Rank workers for every trade a project still needs, best first,
    /// truncated to the shortlist limit. A project needing zero trades
    /// yields an empty list, not an error.
    pub fn find_workers_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<WorkerMatchResult>, MatchError> {
        self.find_workers_for_project_on(project_id, Local::now().date_naive())
    }

    /// Same as [`find_workers_for_project`](Self::find_workers_for_project)
    /// with an explicit scoring date, so certification expiry is
    /// deterministic under test.
    pub fn find_workers_for_project_on(
        &self,
        project_id: &ProjectId,
        today: NaiveDate,
    ) -> Result<Vec<WorkerMatchResult>, MatchError> {
        let mut cache = OntologyCache::new();

        let project = self
            .store
            .project(project_id)?
            .ok_or_else(|| MatchError::ProjectNotFound(project_id.clone()))?;

        if project.needed_trades.is_empty() {
            return Ok(Vec::new());
        }

        let assigned_workers: HashSet<WorkerId> = self
            .store
            .assignments_by_project(project_id)?
            .into_iter()
            .map(|assignment| assignment.worker_id)
            .collect();

        let mut results = Vec::new();
        for needed_trade in &project.needed_trades {
            // Absence of an ontology trade is handled per candidate via the
            // neutral midpoints, never as a failure.
            let trade = self.store.trade_by_name(needed_trade)?;
            let ontology = match &trade {
                Some(trade) => Some(cache.get(self.store.as_ref(), &trade.id)?.clone()),
                None => None,
            };

            let mut seen = HashSet::new();
            let mut candidates = Vec::new();
            for label in resolve_to_worker_labels(needed_trade) {
                for worker in self.store.workers_by_trade_label(&label)? {
                    if seen.insert(worker.id.clone()) {
                        candidates.push(worker);
                    }
                }
            }

            debug!(
                trade = %needed_trade,
                candidates = candidates.len(),
                resolved = trade.is_some(),
                "scoring candidates for needed trade"
            );

            for worker in candidates {
                let already_assigned = assigned_workers.contains(&worker.id);
                let worker_skills = self.store.worker_skills(&worker.id)?;
                let worker_certifications = self.store.worker_certifications(&worker.id)?;

                let fit = trade_fit(
                    ontology.as_ref(),
                    &worker_skills,
                    &worker_certifications,
                    today,
                );
                let score = breakdown(
                    &fit,
                    worker.available,
                    worker.experience_years,
                    already_assigned,
                );

                results.push(WorkerMatchResult {
                    worker,
                    matched_trade: needed_trade.clone(),
                    already_assigned,
                    score,
                    skills: fit.skills,
                    certifications: fit.certifications,
                });
            }
        }

        sort_and_truncate(&mut results, |result| result.score.total);
        Ok(results)
    }

    /// Rank active projects needing the worker's trade, best first,
    /// truncated to the shortlist limit.
    pub fn find_jobs_for_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<ProjectMatchResult>, MatchError> {
        self.find_jobs_for_worker_on(worker_id, Local::now().date_naive())
    }

    /// Same as [`find_jobs_for_worker`](Self::find_jobs_for_worker) with an
    /// explicit scoring date.
    pub fn find_jobs_for_worker_on(
        &self,
        worker_id: &WorkerId,
        today: NaiveDate,
    ) -> Result<Vec<ProjectMatchResult>, MatchError> {
        let mut cache = OntologyCache::new();

        let worker = self
            .store
            .worker(worker_id)?
            .ok_or_else(|| MatchError::WorkerNotFound(worker_id.clone()))?;

        let canonical_trade = resolve_to_ontology(&worker.trade).to_string();

        // The worker's profile does not change per project, so fetch it and
        // score the trade fit once for the whole candidate pool.
        let worker_skills = self.store.worker_skills(worker_id)?;
        let worker_certifications = self.store.worker_certifications(worker_id)?;

        let assigned_projects: HashSet<ProjectId> = self
            .store
            .assignments_by_worker(worker_id)?
            .into_iter()
            .map(|assignment| assignment.project_id)
            .collect();

        let trade = self.store.trade_by_name(&canonical_trade)?;
        let ontology = match &trade {
            Some(trade) => Some(cache.get(self.store.as_ref(), &trade.id)?.clone()),
            None => None,
        };
        let fit = trade_fit(
            ontology.as_ref(),
            &worker_skills,
            &worker_certifications,
            today,
        );

        debug!(
            worker = %worker.id,
            trade = %canonical_trade,
            resolved = trade.is_some(),
            "scoring active projects for worker"
        );

        let mut results = Vec::new();
        for project in self.store.active_projects()? {
            if !project
                .needed_trades
                .iter()
                .any(|needed| needed == &canonical_trade)
            {
                continue;
            }

            let already_assigned = assigned_projects.contains(&project.id);
            let score = breakdown(
                &fit,
                worker.available,
                worker.experience_years,
                already_assigned,
            );

            results.push(ProjectMatchResult {
                project,
                matched_trade: canonical_trade.clone(),
                already_assigned,
                score,
                skills: fit.skills.clone(),
                certifications: fit.certifications.clone(),
            });
        }

        sort_and_truncate(&mut results, |result| result.score.total);
        Ok(results)
    }
}

/// Stable descending sort on total score, then truncate to the shortlist
/// limit. Equal totals keep their encounter order.
fn sort_and_truncate<T>(results: &mut Vec<T>, total: impl Fn(&T) -> f64) {
    results.sort_by(|a, b| {
        total(b)
            .partial_cmp(&total(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(SHORTLIST_LIMIT);
}
