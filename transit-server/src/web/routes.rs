//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::StationId;
use crate::routing::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", post(compute_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations, ordered by display name ascending.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    let stations = state
        .service
        .stations()
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Json(stations)
}

/// Compute a minimum-time route between two stations.
async fn compute_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so the rejection carries our error shape
    let req: RouteRequest = serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
        message: format!("invalid request body: {e}"),
    })?;

    let start =
        StationId::parse(&req.start_station_id).map_err(|e| AppError::BadRequest {
            message: format!("invalid start station id: {e}"),
        })?;
    let end = StationId::parse(&req.end_station_id).map_err(|e| AppError::BadRequest {
        message: format!("invalid end station id: {e}"),
    })?;

    let itinerary = state.service.plan(&start, &end).map_err(AppError::from)?;
    let response = RouteResponse::from_itinerary(&itinerary, state.service.dataset());

    Ok(Json(response).into_response())
}

/// Application error type.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            // Unknown ids are treated as invalid requests, consistently
            // with the other malformed-query cases.
            RouteError::UnknownStation(_) | RouteError::SameStation => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::NoRoute { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(status = %status, "request rejected: {message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
