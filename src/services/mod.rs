//! Service layer for gastos
//!
//! Validation and store round-trips on top of the local storage layer.

pub mod expense;
pub mod income;

pub use expense::{ExpenseChanges, ExpenseService, NewExpense, SyncOutcome};
pub use income::IncomeService;
