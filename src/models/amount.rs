//! Raw monetary amounts as received from the remote store
//!
//! The store sends decimals as JSON strings ("15.50") while locally created
//! records carry numbers. `Amount` keeps whatever arrived so listings can show
//! it untouched, and coerces to `f64` only when aggregating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in the shape it arrived in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Amount {
    /// A JSON number
    Number(f64),
    /// A JSON string, possibly not numeric at all
    Text(String),
    /// `null` or absent
    #[default]
    Missing,
}

impl Amount {
    /// Create an amount from a number
    pub const fn from_f64(value: f64) -> Self {
        Self::Number(value)
    }

    /// Coerced numeric value used for aggregation
    ///
    /// Anything that is not a finite number (unparseable text, NaN, missing)
    /// counts as zero.
    pub fn value(&self) -> f64 {
        self.try_value().unwrap_or(0.0)
    }

    /// The numeric value, or `None` when it cannot be coerced
    pub fn try_value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                // An empty string is numerically zero for the store's clients
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().ok()?
                }
            }
            Self::Missing => return None,
        };

        value.is_finite().then_some(value)
    }

    /// Whether the raw value can be coerced to a number
    pub fn is_numeric(&self) -> bool {
        self.try_value().is_some()
    }

    /// Parse user input strictly
    ///
    /// Accepts "10", "10.5", "15,50" and an optional leading currency symbol.
    pub fn parse(input: &str) -> Result<Self, AmountParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .trim_start_matches(|c: char| c.is_alphabetic() || c == '$')
            .trim()
            .replace(',', ".");

        match digits.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Self::Number(v)),
            _ => Err(AmountParseError::InvalidFormat(trimmed.to_string())),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Missing => Ok(()),
        }
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
