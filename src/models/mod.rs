pub mod estimate;

pub use estimate::{EquipmentItem, EstimateResponse, FieldValue, OfficialBudget, NOT_SPECIFIED};
