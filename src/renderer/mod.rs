//! Estimate rendering
//!
//! Turns an [`EstimateResponse`] into a [`DisplayModel`]: resolves each
//! equipment item's total price, sums the total budget and formats every
//! price with the configured currency.

pub mod format;
pub mod view;

pub use format::{CurrencyFormat, Grouping};
pub use view::{DisplayModel, EquipmentRow, EstimateView, SummaryFields};

use crate::models::{EquipmentItem, EstimateResponse, FieldValue, OfficialBudget, NOT_SPECIFIED};

pub const NO_EQUIPMENT_MESSAGE: &str = "No equipment data available";
pub const BUDGET_NOT_AVAILABLE: &str = "Not available";
const CALCULATED_SUFFIX: &str = " (calculated)";

/// Render with the default currency format
pub fn render(response: &EstimateResponse) -> DisplayModel {
    Renderer::default().render(response)
}

/// Where an item's total came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalSource {
    /// `total_price` was a number
    Listed,
    /// `total_price` was numeric-looking text
    Parsed,
    /// `unit_price * quantity`, `total_price` was "Not specified"
    Computed,
    /// `unit_price * quantity`, `total_price` was other non-numeric text
    Substituted,
}

/// Total price resolved for one equipment item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTotal {
    pub amount: f64,
    pub source: TotalSource,
}

impl ResolvedTotal {
    /// Only a positive product standing in for a "Not specified" total is
    /// shown as a calculated price
    pub fn is_calculated(&self) -> bool {
        self.source == TotalSource::Computed && self.amount > 0.0
    }
}

/// Resolve the total price of an item
///
/// Precedence: numeric `total_price`, then numeric-looking `total_price`
/// text, then `unit_price * quantity` with missing or malformed factors
/// counted as zero.
pub fn resolve_total(item: &EquipmentItem) -> ResolvedTotal {
    match &item.total_price {
        FieldValue::Number(value) if value.is_finite() => ResolvedTotal {
            amount: *value,
            source: TotalSource::Listed,
        },
        total => match total.as_number() {
            Some(amount) => ResolvedTotal {
                amount,
                source: TotalSource::Parsed,
            },
            None => ResolvedTotal {
                amount: item.unit_price.as_number_or_zero() * item.quantity.as_number_or_zero(),
                source: if total.is_not_specified() {
                    TotalSource::Computed
                } else {
                    TotalSource::Substituted
                },
            },
        },
    }
}

/// Item count badge text
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    format: CurrencyFormat,
}

impl Renderer {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    pub fn render(&self, response: &EstimateResponse) -> DisplayModel {
        if let Some(message) = &response.error {
            return DisplayModel::error(message.clone());
        }

        let rows: Vec<EquipmentRow> = response
            .equipment
            .iter()
            .enumerate()
            .map(|(idx, item)| self.render_row(idx + 1, item))
            .collect();

        let total_budget: f64 = rows.iter().map(|row| row.resolved_total).sum();
        let placeholder = rows.is_empty().then(|| NO_EQUIPMENT_MESSAGE.to_string());

        DisplayModel::Estimate(EstimateView {
            summary: SummaryFields {
                cssd_area: response.cssd_area.display_plain(),
                bed_range: response.bed_range.display_plain(),
                autoclave_model: response.autoclave_model.display_plain(),
                autoclave_quantity: response.autoclave_quantity.display_plain(),
            },
            item_count: rows.len(),
            item_count_label: item_count_label(rows.len()),
            total_budget,
            total_budget_display: self.format.amount(total_budget),
            official_budget_display: self.official_budget(response.official_budget.as_ref()),
            placeholder,
            rows,
        })
    }

    fn render_row(&self, index: usize, item: &EquipmentItem) -> EquipmentRow {
        let resolved = resolve_total(item);

        let total_price = if resolved.is_calculated() {
            format!("{}{}", self.format.amount(resolved.amount), CALCULATED_SUFFIX)
        } else if matches!(resolved.source, TotalSource::Computed | TotalSource::Substituted) {
            self.price(&item.total_price)
        } else {
            self.format.amount(resolved.amount)
        };

        EquipmentRow {
            index,
            name: item.name.clone(),
            specification: item.specification.clone(),
            quantity: item.quantity.display_plain(),
            unit_price: self.price(&item.unit_price),
            total_price,
            resolved_total: resolved.amount,
            calculated: resolved.is_calculated(),
        }
    }

    /// Price field display: currency when numeric, text verbatim otherwise
    fn price(&self, value: &FieldValue) -> String {
        match value.as_number() {
            Some(amount) => self.format.amount(amount),
            None if value.is_not_specified() => NOT_SPECIFIED.to_string(),
            None => value.display_plain(),
        }
    }

    fn official_budget(&self, budget: Option<&OfficialBudget>) -> String {
        let Some(budget) = budget else {
            return BUDGET_NOT_AVAILABLE.to_string();
        };

        match (budget.min.as_number(), budget.max.as_number()) {
            (Some(min), Some(max)) => {
                format!("{} to {}", self.format.amount(min), self.format.amount(max))
            }
            (Some(bound), None) | (None, Some(bound)) => self.format.amount(bound),
            (None, None) => BUDGET_NOT_AVAILABLE.to_string(),
        }
    }
}
