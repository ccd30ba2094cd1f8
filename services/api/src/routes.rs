use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use crewmatch::matching::service::MatchingService;
use crewmatch::matching::store::OntologyStore;
use crewmatch::matching::matching_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_operational_routes<S>(service: Arc<MatchingService<S>>) -> axum::Router
where
    S: OntologyStore + 'static,
{
    matching_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sample_store;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn sample_router() -> axum::Router {
        let service = Arc::new(MatchingService::new(Arc::new(sample_store())));
        with_operational_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
    }

    #[tokio::test]
    async fn sample_campus_serves_project_candidates() {
        let response = sample_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/projects/p-dh-east/candidates")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let results = payload.as_array().expect("array");
        // Three electricians plus the pipefitter and plumber labels.
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn hvac_mechanic_label_staffs_the_hvac_slot_in_both_directions() {
        let candidates = sample_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/projects/p-dh-west/candidates")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(candidates.status(), StatusCode::OK);
        let body = to_bytes(candidates.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let ids: Vec<_> = payload
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|result| {
                result
                    .get("worker")
                    .and_then(|worker| worker.get("id"))
                    .and_then(Value::as_str)
            })
            .collect();
        assert!(ids.contains(&"w-petit"));

        let openings = sample_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/workers/w-petit/openings")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(openings.status(), StatusCode::OK);
        let body = to_bytes(openings.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let projects: Vec<_> = payload
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|result| {
                result
                    .get("project")
                    .and_then(|project| project.get("id"))
                    .and_then(Value::as_str)
            })
            .collect();
        assert_eq!(projects, vec!["p-dh-west"]);
    }

    #[tokio::test]
    async fn sample_campus_serves_worker_openings() {
        let response = sample_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/workers/w-silva/openings")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let results = payload.as_array().expect("array");
        // Only Data Hall East needs the pipefitting trade and is active.
        assert_eq!(results.len(), 1);
    }
}
