use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use super::range::BedRange;
use crate::models::{EquipmentItem, FieldValue};

/// Autoclave spec that the planning sheet marks as unsuitable
const NOT_RECOMMENDED: &str = "Not Recommended";

#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("failed to read planning data {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse planning data {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("planning data {0} has no area or autoclave ranges")]
    Empty(String),
}

/// CSSD planning table: area and autoclave requirements per bed range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningData {
    #[serde(default, rename = "area")]
    pub areas: Vec<AreaRequirement>,
    #[serde(default, rename = "autoclave")]
    pub autoclaves: Vec<AutoclaveRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRequirement {
    pub range: BedRange,
    pub area_sq_ft: Option<f64>,
    pub official_min_budget: Option<f64>,
    pub official_max_budget: Option<f64>,
    #[serde(default)]
    pub equipment: Vec<EquipmentEntry>,
}

/// Equipment row as written in the planning file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    pub specification: String,
    pub quantity: FieldValue,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoclaveRequirement {
    pub range: BedRange,
    pub cylindrical: Option<AutoclaveOption>,
    pub rectangular: Option<AutoclaveOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoclaveOption {
    pub spec: String,
    pub quantity: f64,
}

/// Autoclave chosen for a bed range
#[derive(Debug, Clone, PartialEq)]
pub struct AutoclaveSelection {
    pub model: String,
    pub quantity: f64,
}

impl PlanningData {
    /// Parse planning data from TOML text
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, PlanningError> {
        let mut data: PlanningData = toml::from_str(text).map_err(|source| PlanningError::Parse {
            path: origin.to_string(),
            source,
        })?;

        if data.areas.is_empty() && data.autoclaves.is_empty() {
            return Err(PlanningError::Empty(origin.to_string()));
        }

        data.normalize();
        Ok(data)
    }

    /// Load planning data from a TOML file
    pub fn load(path: &Path) -> Result<Self, PlanningError> {
        let origin = path.display().to_string();
        info!("Loading planning data from {}", origin);

        let text = std::fs::read_to_string(path).map_err(|source| PlanningError::Read {
            path: origin.clone(),
            source,
        })?;

        let data = Self::from_toml_str(&text, &origin)?;
        info!(
            "Processed planning data: {} area ranges, {} autoclave ranges",
            data.areas.len(),
            data.autoclaves.len()
        );
        Ok(data)
    }

    /// Load from `path`, falling back to the built-in table when allowed
    pub fn load_or_fallback(path: Option<&Path>, fallback_on_error: bool) -> Result<Self, PlanningError> {
        let Some(path) = path else {
            warn!("No planning data file configured, using built-in planning table");
            return Ok(super::fallback::builtin());
        };

        match Self::load(path) {
            Ok(data) => Ok(data),
            Err(e) if fallback_on_error => {
                warn!("{}; using built-in planning table", e);
                Ok(super::fallback::builtin())
            }
            Err(e) => Err(e),
        }
    }

    pub fn area_for(&self, beds: u32) -> Option<&AreaRequirement> {
        self.areas.iter().find(|area| area.range.contains(beds))
    }

    pub fn autoclave_for(&self, beds: u32) -> Option<&AutoclaveRequirement> {
        self.autoclaves.iter().find(|autoclave| autoclave.range.contains(beds))
    }

    /// Drop unusable equipment rows and fix known misspellings
    fn normalize(&mut self) {
        for area in &mut self.areas {
            let before = area.equipment.len();
            area.equipment.retain(EquipmentEntry::is_listed);
            for entry in &mut area.equipment {
                entry.name = canonical_equipment_name(&entry.name);
            }
            if before != area.equipment.len() {
                debug!(
                    "Skipped {} equipment rows without quantity for range {}",
                    before - area.equipment.len(),
                    area.range
                );
            }
        }
    }
}

impl EquipmentEntry {
    /// Rows with no specification or a non-positive quantity are not part of the plan
    fn is_listed(&self) -> bool {
        let spec = self.specification.trim();
        if spec.is_empty() || spec == "0" {
            return false;
        }
        match &self.quantity {
            FieldValue::Number(qty) => *qty > 0.0,
            FieldValue::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Build the response item; total is unit price × quantity when both are numeric
    pub fn to_item(&self) -> EquipmentItem {
        let quantity = match &self.quantity {
            FieldValue::Number(qty) => FieldValue::Number(qty.trunc()),
            other => other.clone(),
        };
        let unit_price = self
            .unit_price
            .map(|price| FieldValue::Number(price.trunc()))
            .unwrap_or_else(FieldValue::not_specified);
        let total_price = match (&self.quantity, self.unit_price) {
            (FieldValue::Number(qty), Some(price)) => FieldValue::Number((price * qty).trunc()),
            _ => FieldValue::not_specified(),
        };

        EquipmentItem {
            name: self.name.clone(),
            specification: self.specification.clone(),
            quantity,
            unit_price,
            total_price,
        }
    }
}

impl AutoclaveRequirement {
    /// Cylindrical first, then rectangular unless marked not recommended
    pub fn select(&self) -> AutoclaveSelection {
        if let Some(option) = self.cylindrical.as_ref().filter(|o| o.quantity > 0.0) {
            return AutoclaveSelection {
                model: format!("Cylindrical: {}", option.spec),
                quantity: option.quantity,
            };
        }

        if let Some(option) = self
            .rectangular
            .as_ref()
            .filter(|o| o.quantity > 0.0 && o.spec != NOT_RECOMMENDED)
        {
            return AutoclaveSelection {
                model: format!("Rectangular: {}", option.spec),
                quantity: option.quantity,
            };
        }

        AutoclaveSelection {
            model: crate::models::NOT_SPECIFIED.to_string(),
            quantity: 0.0,
        }
    }
}

/// Known spellings in planning sheets mapped to display names
const EQUIPMENT_NAMES: &[(&str, &str)] = &[
    ("Cyliendrical", "Cylindrical Autoclave"),
    ("Reactangular", "Rectangular Autoclave"),
    ("Vertical Auto", "Vertical Autoclave"),
    ("Flash Auto", "Flash Autoclave"),
    ("ETO Packing", "ETO Packing Table"),
    ("ETO", "ETO Sterilizer"),
    ("Heat Seal", "Heat Sealing Machine"),
    ("Washer", "Washer Disinfector"),
    ("Ultrasonic", "Ultrasonic Cleaner"),
    ("Hot Air", "Hot Air Oven"),
    ("Storage", "Storage Rack"),
    ("Open Trolly", "Open Trolley"),
    ("Close Trolly", "Closed Trolley"),
];

/// Map a sheet spelling to its display name; unknown names pass through trimmed
pub fn canonical_equipment_name(name: &str) -> String {
    let name = name.trim();
    EQUIPMENT_NAMES
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| name.to_string())
}
