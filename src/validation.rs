//! Bed count validation, shared by the form client and the calculate handler

/// Shown when the form is submitted without a usable bed count
pub const INVALID_BED_COUNT: &str = "Please enter a valid number of beds";
/// Returned by the server for a missing, zero or negative bed count
pub const NON_POSITIVE_BED_COUNT: &str = "Please enter a valid positive number of beds";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not a whole number (or out of range)
    #[error("Please enter a valid number of beds")]
    NotANumber,
    /// Zero or negative
    #[error("Please enter a valid positive number of beds")]
    NotPositive,
}

/// Parse a bed count from raw form input
///
/// The input must be a whole number; blank text is not one. A form posted
/// without the field at all is handled by the caller as zero.
pub fn parse_bed_count(raw: &str) -> Result<u32, ValidationError> {
    let value: i64 = raw.trim().parse().map_err(|_| ValidationError::NotANumber)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive);
    }
    u32::try_from(value).map_err(|_| ValidationError::NotANumber)
}

/// Client-side check before anything is sent
///
/// Every failure is reported with the same message.
pub fn validate_bed_count(raw: &str) -> Result<u32, ValidationError> {
    parse_bed_count(raw).map_err(|_| ValidationError::NotANumber)
}
