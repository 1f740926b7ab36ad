use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;

use crate::{
    metrics::{self, outcome},
    planning::{requirements_for, NO_REQUIREMENTS},
    validation::{parse_bed_count, ValidationError},
};

use super::AppState;

/// Form fields posted by the estimate form
#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    #[serde(default)]
    pub bed_count: Option<String>,
}

/// Handle POST /calculate
///
/// Always answers 200 with JSON: either the estimate or `{"error": "..."}`.
pub async fn handle_calculate(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Response {
    let start = Instant::now();

    let parsed = match form.bed_count.as_deref() {
        Some(raw) => parse_bed_count(raw),
        // Field absent: same as a bed count of zero
        None => Err(ValidationError::NotPositive),
    };

    let bed_count = match parsed {
        Ok(count) => count,
        Err(e) => {
            tracing::info!(bed_count = ?form.bed_count, "Rejected bed count: {}", e);
            metrics::record_calculation(outcome::INVALID_INPUT);
            return error_body(e.to_string());
        }
    };

    let planning = state.planning.load();
    let Some(requirements) = requirements_for(&planning, bed_count) else {
        tracing::info!(bed_count, "No planning range covers the bed count");
        metrics::record_calculation(outcome::NO_MATCH);
        return error_body(NO_REQUIREMENTS);
    };

    tracing::info!(
        bed_count,
        bed_range = %requirements.bed_range.display_plain(),
        equipment_count = requirements.equipment.len(),
        "Calculated CSSD requirements"
    );
    for (idx, item) in requirements.equipment.iter().enumerate() {
        tracing::debug!(
            "Equipment {}: {}, Qty: {}, Unit Price: {}, Total Price: {}",
            idx + 1,
            item.name,
            item.quantity.display_plain(),
            item.unit_price.display_plain(),
            item.total_price.display_plain()
        );
    }

    metrics::record_calculation(outcome::SUCCESS);
    metrics::record_equipment_items(requirements.equipment.len());
    metrics::record_duration(start.elapsed());

    Json(requirements).into_response()
}

fn error_body(message: impl Into<String>) -> Response {
    Json(json!({ "error": message.into() })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::fallback;
    use crate::renderer::Renderer;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn call(bed_count: Option<&str>) -> Value {
        let state = AppState::new(fallback::builtin(), Renderer::default());
        let form = CalculateForm {
            bed_count: bed_count.map(str::to_string),
        };
        let response = handle_calculate(State(state), Form(form)).await;
        assert_eq!(response.status(), 200);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_success() {
        let body = call(Some("60")).await;
        assert_eq!(body["bed_range"], "50-70");
        assert_eq!(body["bed_count"], 60);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_calculate_missing_bed_count() {
        let body = call(None).await;
        assert_eq!(body["error"], "Please enter a valid positive number of beds");
    }

    #[tokio::test]
    async fn test_calculate_blank_bed_count() {
        let body = call(Some("")).await;
        assert_eq!(body["error"], "Please enter a valid number of beds");
    }

    #[tokio::test]
    async fn test_calculate_not_a_number() {
        let body = call(Some("lots")).await;
        assert_eq!(body["error"], "Please enter a valid number of beds");
    }

    #[tokio::test]
    async fn test_calculate_out_of_range() {
        let body = call(Some("5000")).await;
        assert_eq!(body["error"], NO_REQUIREMENTS);
    }
}
