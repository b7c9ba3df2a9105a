//! Price and dimension formatting helpers

/// Format a numeric amount, dropping the fraction when it is whole.
///
/// Prices in the catalog are usually whole numbers; fractional values keep
/// two decimals.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Format a price with its currency symbol, e.g. `₹4500`.
#[must_use]
pub fn format_price(currency: &str, value: f64) -> String {
    format!("{currency}{}", format_amount(value))
}

/// Format room dimensions, e.g. `12 × 10 ft`.
#[must_use]
pub fn format_dimensions(width: f64, length: f64, unit: &str) -> String {
    format!("{} × {} {unit}", format_amount(width), format_amount(length))
}
