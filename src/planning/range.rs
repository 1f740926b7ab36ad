use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BedRangeError {
    #[error("bed range is empty")]
    Empty,
    #[error("no digits in bed range '{0}'")]
    NoDigits(String),
    #[error("bed count in range '{0}' is too large")]
    OutOfRange(String),
    #[error("bed range '{0}' has its lower bound above its upper bound")]
    Inverted(String),
}

/// Inclusive range of hospital bed counts, as labelled in the planning sheet
///
/// Accepted labels: `"0-20"`, `"0 - 20 beds"`, `"201+"` (open ended) and a
/// single number `"50"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BedRange {
    pub min_beds: u32,
    /// `None` for open-ended ranges
    pub max_beds: Option<u32>,
    pub label: String,
}

impl BedRange {
    pub fn contains(&self, beds: u32) -> bool {
        beds >= self.min_beds && self.max_beds.map_or(true, |max| beds <= max)
    }
}

impl FromStr for BedRange {
    type Err = BedRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(BedRangeError::Empty);
        }

        let bound = |text: &str| digits(text, label);
        let (min_beds, max_beds) = if let Some((low, high)) = label.split_once('-') {
            (bound(low)?, Some(bound(high)?))
        } else if label.contains('+') {
            (bound(label)?, None)
        } else {
            let value = bound(label)?;
            (value, Some(value))
        };

        if max_beds.is_some_and(|max| max < min_beds) {
            return Err(BedRangeError::Inverted(label.to_string()));
        }

        Ok(Self {
            min_beds,
            max_beds,
            label: label.to_string(),
        })
    }
}

impl TryFrom<String> for BedRange {
    type Error = BedRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BedRange> for String {
    fn from(range: BedRange) -> Self {
        range.label
    }
}

impl fmt::Display for BedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Collect the ASCII digits of `text` into a number
fn digits(text: &str, label: &str) -> Result<u32, BedRangeError> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(BedRangeError::NoDigits(label.to_string()));
    }
    digits
        .parse()
        .map_err(|_| BedRangeError::OutOfRange(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_range() {
        let range: BedRange = "20-30".parse().unwrap();
        assert_eq!(range.min_beds, 20);
        assert_eq!(range.max_beds, Some(30));
        assert_eq!(range.label, "20-30");
        assert!(range.contains(20));
        assert!(range.contains(30));
        assert!(!range.contains(31));
    }

    #[test]
    fn test_parse_decorated_range() {
        let range: BedRange = "0 - 20 beds".parse().unwrap();
        assert_eq!(range.min_beds, 0);
        assert_eq!(range.max_beds, Some(20));
    }

    #[test]
    fn test_parse_open_range() {
        let range: BedRange = "201+".parse().unwrap();
        assert_eq!(range.min_beds, 201);
        assert_eq!(range.max_beds, None);
        assert!(range.contains(5000));
        assert!(!range.contains(200));
    }

    #[test]
    fn test_parse_single_value() {
        let range: BedRange = "50".parse().unwrap();
        assert!(range.contains(50));
        assert!(!range.contains(51));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BedRange>(), Err(BedRangeError::Empty));
        assert!(matches!("beds".parse::<BedRange>(), Err(BedRangeError::NoDigits(_))));
        assert!(matches!("30-20".parse::<BedRange>(), Err(BedRangeError::Inverted(_))));
        assert_eq!(
            "10-99999999999".parse::<BedRange>(),
            Err(BedRangeError::OutOfRange("10-99999999999".to_string()))
        );
        assert!(matches!("5000000000+".parse::<BedRange>(), Err(BedRangeError::OutOfRange(_))));
    }
}
