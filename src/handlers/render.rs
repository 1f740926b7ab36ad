use axum::{body::Bytes, extract::State, Json};

use crate::{error::AppError, models::EstimateResponse, renderer::DisplayModel};

use super::AppState;

/// Handle POST /render
///
/// Takes an estimate (as returned by /calculate) and returns the display model.
pub async fn handle_render(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DisplayModel>, AppError> {
    let response: EstimateResponse = serde_json::from_slice(&body)?;
    Ok(Json(state.renderer.render(&response)))
}
