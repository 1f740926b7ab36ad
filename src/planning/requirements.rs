use tracing::debug;

use super::data::PlanningData;
use crate::models::{EstimateResponse, FieldValue, OfficialBudget};

/// Error returned when no planning range covers the bed count
pub const NO_REQUIREMENTS: &str = "Could not determine requirements for the given bed count";

/// Build the estimate for `bed_count` from the planning table
///
/// Picks the first area range and the first autoclave range containing the
/// bed count. Returns `None` when neither table covers it.
pub fn requirements_for(data: &PlanningData, bed_count: u32) -> Option<EstimateResponse> {
    let area = data.area_for(bed_count);
    let autoclave = data.autoclave_for(bed_count);

    if area.is_none() && autoclave.is_none() {
        debug!("No planning range covers {} beds", bed_count);
        return None;
    }

    let (autoclave_model, autoclave_quantity) = match autoclave.map(|a| a.select()) {
        Some(selection) => (
            FieldValue::Text(selection.model),
            FieldValue::Number(selection.quantity),
        ),
        None => (FieldValue::not_specified(), FieldValue::not_specified()),
    };

    let bound = |value: Option<f64>| {
        value
            .map(|v| FieldValue::Number(v.trunc()))
            .unwrap_or_else(FieldValue::not_specified)
    };

    Some(EstimateResponse {
        bed_count: Some(bed_count),
        bed_range: area
            .map(|a| FieldValue::Text(a.range.label.clone()))
            .unwrap_or_else(|| FieldValue::Text("Unknown".to_string())),
        cssd_area: bound(area.and_then(|a| a.area_sq_ft)),
        autoclave_model,
        autoclave_quantity,
        official_budget: Some(OfficialBudget {
            min: bound(area.and_then(|a| a.official_min_budget)),
            max: bound(area.and_then(|a| a.official_max_budget)),
        }),
        equipment: area
            .map(|a| a.equipment.iter().map(|entry| entry.to_item()).collect())
            .unwrap_or_default(),
        error: None,
    })
}
