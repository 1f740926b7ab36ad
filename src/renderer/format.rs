//! Currency and number formatting for displayed prices
//!
//! Mirrors what a browser's `Number.toLocaleString()` gives for the
//! planning figures: digit grouping, at most three fraction digits and no
//! trailing zeros.

use serde::{Deserialize, Serialize};

/// Maximum number of fraction digits kept when formatting
const MAX_FRACTION_DIGITS: usize = 3;

/// Thousands grouping style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567 (last three digits, then pairs)
    #[default]
    Indian,
    /// 1,234,567
    Western,
}

/// Currency prefix and grouping used for every price field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Format an amount with the currency prefix, e.g. `₹1,50,000`
    pub fn amount(&self, value: f64) -> String {
        format!("{}{}", self.symbol, self.number(value))
    }

    /// Format a number with grouping only
    pub fn number(&self, value: f64) -> String {
        format_grouped(value, self.grouping)
    }
}

/// Group the integer part of `value` and keep up to three fraction digits
pub fn format_grouped(value: f64, grouping: Grouping) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 8);
    // -0.0001 rounds to zero; no sign in that case
    if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
