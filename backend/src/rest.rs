//! REST layer for the planner.
//!
//! Thin axum handlers over the domain services. Domain errors travel as
//! data inside the projection result (HTTP 200); only infrastructure
//! failures and bad requests map to error statuses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::projection::ProjectCompletionCommand;
use crate::storage::FormSnapshotStorage;
use crate::Backend;
use shared::{CalculateRequest, FormSnapshot, TimezoneGroup, TimezoneListResponse};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

/// Build the `/api` router over the given state.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/projection", post(project_completion))
        .route("/timezones", get(list_timezones))
        .route("/timezones/*id", get(get_timezone))
        .route("/form", get(get_form).put(put_form).delete(delete_form))
        .with_state(state)
}

/// Axum handler for POST /api/projection
pub async fn project_completion(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> impl IntoResponse {
    info!("POST /api/projection - request: {:?}", request);

    let command = ProjectCompletionCommand {
        required_amount: request.required_amount,
        current_amount: request.current_amount,
        rate_per_hour: request.rate_per_hour,
        timezone: request.timezone,
    };

    let result = state.backend.projection_service.project_completion_now(command);
    (StatusCode::OK, Json(result)).into_response()
}

/// Query parameters for the timezone listing.
#[derive(Deserialize, Debug)]
pub struct TimezoneListQuery {
    /// Optional case-insensitive filter over label, id, and offset
    pub q: Option<String>,
}

/// Axum handler for GET /api/timezones
pub async fn list_timezones(
    State(state): State<AppState>,
    Query(query): Query<TimezoneListQuery>,
) -> impl IntoResponse {
    info!("GET /api/timezones - query: {:?}", query);

    let catalog = &state.backend.timezone_catalog;
    let matches = catalog.search(query.q.as_deref().unwrap_or(""));

    let groups = shared::RegionGroup::ALL
        .iter()
        .filter_map(|group| {
            let timezones: Vec<_> = matches
                .iter()
                .filter(|entry| entry.group == *group)
                .map(|entry| entry.to_option())
                .collect();
            if timezones.is_empty() {
                None
            } else {
                Some(TimezoneGroup {
                    group: *group,
                    label: group.label().to_string(),
                    timezones,
                })
            }
        })
        .collect();

    (StatusCode::OK, Json(TimezoneListResponse { groups })).into_response()
}

/// Axum handler for GET /api/timezones/*id
pub async fn get_timezone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/timezones/{}", id);

    match state.backend.timezone_catalog.lookup(&id) {
        Some(entry) => (StatusCode::OK, Json(entry.to_option())).into_response(),
        None => (StatusCode::NOT_FOUND, "Timezone not found").into_response(),
    }
}

/// Axum handler for GET /api/form
pub async fn get_form(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/form");

    match state.backend.form_snapshot_store.load_snapshot() {
        Ok(Some(snapshot)) => (StatusCode::OK, Json(snapshot)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "No saved form").into_response(),
        Err(e) => {
            tracing::error!("Error loading form snapshot: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading form snapshot").into_response()
        }
    }
}

/// Axum handler for PUT /api/form
pub async fn put_form(
    State(state): State<AppState>,
    Json(snapshot): Json<FormSnapshot>,
) -> impl IntoResponse {
    info!("PUT /api/form - timezone: {}", snapshot.timezone);

    match state.backend.form_snapshot_store.save_snapshot(&snapshot) {
        Ok(()) => (StatusCode::CREATED, Json(snapshot)).into_response(),
        Err(e) => {
            tracing::error!("Error storing form snapshot: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store form snapshot").into_response()
        }
    }
}

/// Axum handler for DELETE /api/form
pub async fn delete_form(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/form");

    match state.backend.form_snapshot_store.clear_snapshot() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Error clearing form snapshot: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear form snapshot").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Helper to create test handlers backed by a temp data directory.
    fn setup_test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let state = AppState::new(Backend::with_data_dir(dir.path()));
        (state, dir)
    }

    fn calculate_request(required: f64, current: f64, rate: f64) -> CalculateRequest {
        CalculateRequest {
            required_amount: required,
            current_amount: current,
            rate_per_hour: rate,
            timezone: "Asia/Shanghai".to_string(),
        }
    }

    #[tokio::test]
    async fn projection_handler_returns_ok() {
        let (state, _dir) = setup_test_state();

        let response =
            project_completion(State(state), Json(calculate_request(1000.0, 200.0, 100.0)))
                .await
                .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn projection_handler_returns_ok_for_domain_errors() {
        let (state, _dir) = setup_test_state();

        // Domain errors are data, not HTTP failures.
        let response =
            project_completion(State(state), Json(calculate_request(1000.0, 1000.0, 50.0)))
                .await
                .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn timezone_listing_returns_ok() {
        let (state, _dir) = setup_test_state();

        let response = list_timezones(State(state), Query(TimezoneListQuery { q: None }))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn timezone_lookup_handles_hit_and_miss() {
        let (state, _dir) = setup_test_state();

        let hit = get_timezone(State(state.clone()), Path("Asia/Tokyo".to_string()))
            .await
            .into_response();
        assert_eq!(hit.status(), StatusCode::OK);

        // Multi-segment ids come through the wildcard route intact.
        let nested = get_timezone(
            State(state.clone()),
            Path("America/Argentina/Buenos_Aires".to_string()),
        )
        .await
        .into_response();
        assert_eq!(nested.status(), StatusCode::OK);

        let miss = get_timezone(State(state), Path("Mars/Olympus_Mons".to_string()))
            .await
            .into_response();
        assert_eq!(miss.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn router_serves_nested_timezone_ids() {
        use tower::ServiceExt;

        let (state, _dir) = setup_test_state();
        let app = api_router(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/timezones/America/Argentina/Buenos_Aires")
                    .body(axum::body::Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Router call failed");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let option: shared::TimezoneOption =
            serde_json::from_slice(&bytes).expect("Body should be a timezone option");
        assert_eq!(option.id, "America/Argentina/Buenos_Aires");
    }

    #[tokio::test]
    async fn form_round_trip_through_handlers() {
        let (state, _dir) = setup_test_state();

        // Empty store starts as 404.
        let missing = get_form(State(state.clone())).await.into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let snapshot = FormSnapshot {
            required_amount: "1,000".to_string(),
            current_amount: "200".to_string(),
            rate_per_hour: "100".to_string(),
            timezone: "Asia/Tokyo".to_string(),
            dark_mode: false,
        };
        let stored = put_form(State(state.clone()), Json(snapshot)).await.into_response();
        assert_eq!(stored.status(), StatusCode::CREATED);

        let found = get_form(State(state.clone())).await.into_response();
        assert_eq!(found.status(), StatusCode::OK);

        let cleared = delete_form(State(state.clone())).await.into_response();
        assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

        let gone = get_form(State(state)).await.into_response();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }
}
