use serde::{Deserialize, Serialize};

/// Everything a view layer needs to show one estimate (or the error instead)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayModel {
    /// Only the message is shown; previous results are hidden
    Error { message: String },
    /// Rendered estimate
    Estimate(EstimateView),
}

impl DisplayModel {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn as_estimate(&self) -> Option<&EstimateView> {
        match self {
            Self::Estimate(view) => Some(view),
            Self::Error { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateView {
    pub summary: SummaryFields,
    pub rows: Vec<EquipmentRow>,
    /// Message shown in place of the table when there is no equipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub item_count: usize,
    pub item_count_label: String,
    pub total_budget: f64,
    pub total_budget_display: String,
    pub official_budget_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFields {
    pub cssd_area: String,
    pub bed_range: String,
    pub autoclave_model: String,
    pub autoclave_quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    /// 1-based position in the list
    pub index: usize,
    pub name: String,
    pub specification: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_price: String,
    /// Amount added to the total budget for this row
    pub resolved_total: f64,
    /// Total was derived from unit price × quantity
    pub calculated: bool,
}
