//! Monthly income model
//!
//! A single value per user, independent of expense records. It only feeds the
//! dashboard's income vs. spent vs. invested cards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's monthly income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MonthlyIncome(f64);

impl MonthlyIncome {
    /// Create a monthly income value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Validate before sending to the store
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.0.is_finite() {
            return Err(IncomeValidationError::NotANumber);
        }
        if self.0 < 0.0 {
            return Err(IncomeValidationError::Negative(self.0));
        }
        Ok(())
    }
}

impl fmt::Display for MonthlyIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Validation errors for monthly income
#[derive(Debug, Clone, PartialEq)]
pub enum IncomeValidationError {
    NotANumber,
    Negative(f64),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Monthly income must be a number"),
            Self::Negative(v) => write!(f, "Monthly income cannot be negative: {}", v),
        }
    }
}

impl std::error::Error for IncomeValidationError {}
