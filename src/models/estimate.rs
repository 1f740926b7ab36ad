use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker the calculate endpoint uses for a field that was intentionally left out
pub const NOT_SPECIFIED: &str = "Not specified";

/// Computed estimate returned by `/calculate` for one bed count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Bed count the estimate was computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_count: Option<u32>,
    /// CSSD floor area (square feet)
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub cssd_area: FieldValue,
    /// Matched bed range label, e.g. "50-70"
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub bed_range: FieldValue,
    /// Recommended autoclave, e.g. "Cylindrical: 20×48 Double Door"
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub autoclave_model: FieldValue,
    /// Number of autoclaves
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub autoclave_quantity: FieldValue,
    /// Official budget range for the bed range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_budget: Option<OfficialBudget>,
    /// Equipment list, in display order
    #[serde(default, deserialize_with = "nullable_list")]
    pub equipment: Vec<EquipmentItem>,
    /// Error message; supersedes every other field when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EstimateResponse {
    /// Build an error-only response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Official minimum / maximum budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialBudget {
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub min: FieldValue,
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub max: FieldValue,
}

/// One row of the equipment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    #[serde(default)]
    pub specification: String,
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub quantity: FieldValue,
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub unit_price: FieldValue,
    #[serde(default = "FieldValue::not_specified", deserialize_with = "nullable")]
    pub total_price: FieldValue,
}

/// A value that is either a number or free text (usually the "Not specified" marker)
///
/// Read untagged and written bare so it matches the JSON the endpoint
/// produces: `150`, `"Not specified"`, `"20-30"`. Whole numbers are written
/// as integers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

/// Largest magnitude an `f64` holds as an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*value as i64)
            }
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::not_specified()
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl FieldValue {
    pub fn not_specified() -> Self {
        Self::Text(NOT_SPECIFIED.to_string())
    }

    /// True for the "Not specified" marker
    pub fn is_not_specified(&self) -> bool {
        matches!(self, Self::Text(text) if text == NOT_SPECIFIED)
    }

    /// Numeric reading of the value
    ///
    /// Numbers are returned as-is (if finite). Text is parsed when it looks
    /// numeric after trimming; the marker, blank text and anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(text) => parse_numeric(text),
        }
    }

    /// Numeric reading with missing/malformed values counted as zero
    pub fn as_number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// Plain display text: numbers without grouping, text verbatim
    pub fn display_plain(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == NOT_SPECIFIED {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `null` reads as the "Not specified" marker
fn nullable<'de, D>(deserializer: D) -> Result<FieldValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FieldValue>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(FieldValue::not_specified))
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<EquipmentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<EquipmentItem>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_response() {
        let body = json!({
            "bed_count": 60,
            "bed_range": "50-70",
            "cssd_area": 500,
            "autoclave_model": "Cylindrical: 20×48 Double Door",
            "autoclave_quantity": 2,
            "official_budget": {"min": 5000000, "max": "Not specified"},
            "equipment": [{
                "name": "Washer Disinfector",
                "specification": "Single chamber",
                "quantity": 1,
                "unit_price": 1200000,
                "total_price": 1200000
            }]
        });

        let response: EstimateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.bed_count, Some(60));
        assert_eq!(response.cssd_area, FieldValue::Number(500.0));
        assert_eq!(response.bed_range, FieldValue::Text("50-70".to_string()));
        assert_eq!(response.equipment.len(), 1);

        let budget = response.official_budget.unwrap();
        assert_eq!(budget.min.as_number(), Some(5_000_000.0));
        assert!(budget.max.is_not_specified());
    }

    #[test]
    fn test_error_only_response() {
        let response: EstimateResponse =
            serde_json::from_value(json!({"error": "bad input"})).unwrap();
        assert_eq!(response.error.as_deref(), Some("bad input"));
        assert!(response.equipment.is_empty());
        assert!(response.official_budget.is_none());
        assert!(response.cssd_area.is_not_specified());
    }

    #[test]
    fn test_null_fields_read_as_not_specified() {
        let response: EstimateResponse = serde_json::from_value(json!({
            "cssd_area": null,
            "official_budget": {"min": null, "max": 900000},
            "equipment": null
        }))
        .unwrap();

        assert!(response.cssd_area.is_not_specified());
        assert!(response.equipment.is_empty());
        assert!(response.official_budget.unwrap().min.is_not_specified());
    }

    #[test]
    fn test_as_number() {
        assert_eq!(FieldValue::Number(12.5).as_number(), Some(12.5));
        assert_eq!(FieldValue::from(" 1500 ").as_number(), Some(1500.0));
        assert_eq!(FieldValue::from("1e3").as_number(), Some(1000.0));
        assert_eq!(FieldValue::not_specified().as_number(), None);
        assert_eq!(FieldValue::from("").as_number(), None);
        assert_eq!(FieldValue::from("N/A").as_number(), None);
        assert_eq!(FieldValue::from("NaN").as_number(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).as_number(), None);
        assert_eq!(FieldValue::from("abc").as_number_or_zero(), 0.0);
    }

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        let response = EstimateResponse {
            cssd_area: 500.0.into(),
            autoclave_quantity: 2.0.into(),
            bed_range: "50-70".into(),
            ..EstimateResponse::default()
        };

        let text = serde_json::to_string(&response).unwrap();
        assert!(text.contains(r#""cssd_area":500,"#), "{}", text);
        assert!(text.contains(r#""autoclave_quantity":2,"#), "{}", text);
        assert!(text.contains(r#""bed_range":"50-70""#), "{}", text);

        assert_eq!(serde_json::to_value(FieldValue::Number(12.5)).unwrap(), json!(12.5));
        assert_eq!(serde_json::to_value(FieldValue::Number(-3.0)).unwrap(), json!(-3));
        assert_eq!(serde_json::to_value(FieldValue::not_specified()).unwrap(), json!("Not specified"));
    }

    #[test]
    fn test_error_serializes_without_empty_fields() {
        let value = serde_json::to_value(EstimateResponse::error("bad input")).unwrap();
        assert_eq!(value["error"], "bad input");
        assert!(value.get("official_budget").is_none());
        assert!(value.get("bed_count").is_none());
    }
}
