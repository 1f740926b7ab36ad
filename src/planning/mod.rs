//! CSSD planning table and bed-count lookup

pub mod data;
pub mod fallback;
pub mod range;
pub mod requirements;

pub use data::{
    canonical_equipment_name, AreaRequirement, AutoclaveOption, AutoclaveRequirement,
    EquipmentEntry, PlanningData, PlanningError,
};
pub use range::{BedRange, BedRangeError};
pub use requirements::{requirements_for, NO_REQUIREMENTS};
