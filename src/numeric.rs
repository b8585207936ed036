// src/numeric.rs

/// Parse a user-entered numeric field, coercing anything unparseable to zero.
///
/// Price and quantity inputs arrive as raw text and must never block the user:
/// empty strings, stray characters, and non-finite values all resolve to 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Rupee rendering for the terminal table. Plain fixed-point fallback; no
/// locale-aware grouping is attempted.
pub fn format_currency(value: f64) -> String {
    format!("₹ {value:.2}")
}
