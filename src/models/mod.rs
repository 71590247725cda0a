//! Core data models for gastos
//!
//! This module contains the data structures of the expense domain: expense
//! records with their raw amounts, the monthly income and the month used as
//! a reference date for monthly views.

pub mod amount;
pub mod expense;
pub mod income;
pub mod month;

pub use amount::{Amount, AmountParseError};
pub use expense::{parse_timestamp, ExpenseKind, ExpenseRecord, ExpenseValidationError};
pub use income::{IncomeValidationError, MonthlyIncome};
pub use month::{Month, MonthParseError};
