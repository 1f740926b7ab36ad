use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::AppState;
use crate::error::AppError;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "cssd-planner",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// Ready once a planning table with at least one range is loaded
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planning = state.planning.load();
    if planning.areas.is_empty() && planning.autoclaves.is_empty() {
        return Err(AppError::PlanningData(
            "no planning ranges are loaded".to_string(),
        ));
    }

    Ok((StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "cssd-planner",
        "area_ranges": planning.areas.len(),
        "autoclave_ranges": planning.autoclaves.len(),
    }))))
}
