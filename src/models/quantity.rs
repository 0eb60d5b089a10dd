//! Parsing of quantity and cost fields typed by the user
//!
//! Form fields arrive as text that may carry a unit (`12 kg`, `30 pcs`) or a
//! currency symbol (`$ 40`). Anything that does not parse to a finite,
//! non-negative number is rejected rather than coerced to zero.

use std::fmt;

/// Units accepted after a quantity
const QUANTITY_UNITS: [&str; 2] = ["kg", "pcs"];

/// Error type for quantity and cost parsing
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityParseError {
    Empty,
    InvalidFormat(String),
    Negative(f64),
    NotFinite(String),
}

impl fmt::Display for QuantityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            Self::Negative(v) => write!(f, "{} is negative", v),
            Self::NotFinite(s) => write!(f, "'{}' is not a finite number", s),
        }
    }
}

impl std::error::Error for QuantityParseError {}

/// Parse a quantity such as `12`, `12.5 kg` or `30 pcs`
pub fn parse_quantity(input: &str) -> Result<f64, QuantityParseError> {
    let mut s = input.trim();
    for unit in QUANTITY_UNITS {
        if let Some(stripped) = s.strip_suffix(unit) {
            s = stripped.trim_end();
            break;
        }
    }
    parse_non_negative(s)
}

/// Parse a monetary total such as `40`, `$40.50` or `$ 40`
pub fn parse_cost(input: &str) -> Result<f64, QuantityParseError> {
    let s = input.trim();
    let s = s.strip_prefix('$').unwrap_or(s).trim_start();
    parse_non_negative(s)
}

fn parse_non_negative(s: &str) -> Result<f64, QuantityParseError> {
    if s.is_empty() {
        return Err(QuantityParseError::Empty);
    }

    let value: f64 = s
        .parse()
        .map_err(|_| QuantityParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(QuantityParseError::NotFinite(s.to_string()));
    }
    if value < 0.0 {
        return Err(QuantityParseError::Negative(value));
    }

    // Normalize -0.0
    Ok(value.abs())
}
