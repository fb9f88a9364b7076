//! # Display Formatting
//!
//! Presentation strings for a [`CalculatorResult`](crate::CalculatorResult).
//! No business logic lives here.
//!
//! ```text
//! estimated_cost       157500  ──► "฿157,500"
//! recommended_capacity 3.5     ──► "3.5 kW"
//! payback_period       7.3     ──► "7.3 ปี"
//! ```

use crate::types::CalculatorResult;

/// Thai Baht sign.
pub const CURRENCY_SYMBOL: &str = "฿";

/// Thai label for "years".
pub const YEARS_LABEL: &str = "ปี";

/// Shown when no payback period exists.
pub const NOT_APPLICABLE: &str = "-";

/// Formats an amount of baht with thousands separators and no decimals.
///
/// ## Example
/// ```rust
/// use solar_core::format::format_currency;
///
/// assert_eq!(format_currency(45_000.0), "฿45,000");
/// assert_eq!(format_currency(1_000_000.0), "฿1,000,000");
/// assert_eq!(format_currency(45_000.99), "฿45,001");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(rounded.abs() as u64)
    )
}

/// Formats a capacity in kW with one decimal.
pub fn format_capacity(capacity_kw: f64) -> String {
    format!("{:.1} kW", capacity_kw)
}

/// Formats a payback period in years with one decimal.
pub fn format_payback_period(years: f64) -> String {
    format!("{:.1} {}", years, YEARS_LABEL)
}

/// Formats an optional payback period, `-` when none exists.
pub fn format_payback(years: Option<f64>) -> String {
    years.map_or_else(|| NOT_APPLICABLE.to_string(), format_payback_period)
}

/// All display strings of a result, in card order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub recommended_capacity: String,
    pub estimated_cost: String,
    pub monthly_savings: String,
    pub payback_period: String,
}

impl From<&CalculatorResult> for FormattedResult {
    fn from(result: &CalculatorResult) -> Self {
        FormattedResult {
            recommended_capacity: format_capacity(result.recommended_capacity),
            estimated_cost: format_currency(result.estimated_cost as f64),
            monthly_savings: format_currency(result.monthly_savings as f64),
            payback_period: format_payback(result.payback_period),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
