// src/ui/format.rs
use serde_json::Value;

/// Shown wherever the backend omitted a field.
pub const PLACEHOLDER: &str = "—";

/// Health score as a percentage, without a trailing ".0" for whole numbers.
pub fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.fract() == 0.0 => format!("{}%", s as i64),
        Some(s) => format!("{s:.1}%"),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn fmt_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

/// Extracted test values render with two decimals.
pub fn fmt_value(value: f64) -> String {
    format!("{value:.2}")
}

pub fn fmt_size_mb(size_mb: f64) -> String {
    format!("{size_mb:.2} MB")
}

/// Loose scalar out of the raw JSON (abnormal-test values may be numbers or
/// strings depending on what the backend extracted).
pub fn fmt_scalar(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
