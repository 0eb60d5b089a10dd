//! Field checks shared by the record services

use crate::error::{FarmError, FarmResult};
use crate::models::{parse_cost, parse_quantity};

pub(crate) fn quantity_field(label: &str, value: &str) -> FarmResult<f64> {
    parse_quantity(value).map_err(|e| FarmError::Validation(format!("{}: {}", label, e)))
}

pub(crate) fn cost_field(label: &str, value: &str) -> FarmResult<f64> {
    parse_cost(value).map_err(|e| FarmError::Validation(format!("{}: {}", label, e)))
}

/// Trimmed text, rejected if empty
pub(crate) fn required_text(label: &str, value: &str) -> FarmResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FarmError::Validation(format!("{} cannot be empty", label)));
    }
    Ok(value.to_string())
}

/// Trimmed text, `None` if blank
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Render a stored number back into an editable field
pub(crate) fn field_text(value: f64) -> String {
    format!("{}", value)
}
