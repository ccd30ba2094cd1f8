use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{ProjectId, WorkerId};
use super::service::{MatchError, MatchingService};
use super::store::OntologyStore;

/// Router builder exposing the two matching directions over HTTP.
pub fn matching_router<S>(service: Arc<MatchingService<S>>) -> Router
where
    S: OntologyStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/projects/:project_id/candidates",
            get(workers_for_project_handler::<S>),
        )
        .route(
            "/api/v1/workers/:worker_id/openings",
            get(jobs_for_worker_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn workers_for_project_handler<S>(
    State(service): State<Arc<MatchingService<S>>>,
    Path(project_id): Path<String>,
) -> Response
where
    S: OntologyStore + 'static,
{
    match service.find_workers_for_project(&ProjectId(project_id)) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => match_error_response(error),
    }
}

pub(crate) async fn jobs_for_worker_handler<S>(
    State(service): State<Arc<MatchingService<S>>>,
    Path(worker_id): Path<String>,
) -> Response
where
    S: OntologyStore + 'static,
{
    match service.find_jobs_for_worker(&WorkerId(worker_id)) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => match_error_response(error),
    }
}

fn match_error_response(error: MatchError) -> Response {
    let status = match &error {
        MatchError::ProjectNotFound(_) | MatchError::WorkerNotFound(_) => StatusCode::NOT_FOUND,
        MatchError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
