//! The remote expense store
//!
//! [`ExpenseStore`] is the seam between the client and wherever the records
//! live. [`HttpExpenseStore`] talks to the REST API; tests use an in-memory
//! implementation.

mod credential;
mod http;
mod wire;

#[cfg(test)]
pub(crate) mod memory;

pub use credential::Credential;
pub use http::HttpExpenseStore;

use crate::error::GastosResult;
use crate::models::{ExpenseRecord, MonthlyIncome};

/// Operations the remote store offers to an authenticated user
pub trait ExpenseStore {
    /// The user's own records, in store order
    fn list_expenses(&self) -> GastosResult<Vec<ExpenseRecord>>;

    /// Another user's records, for comparison
    fn list_expenses_of(&self, username: &str) -> GastosResult<Vec<ExpenseRecord>>;

    /// Create a record; the returned copy carries the assigned id and timestamp
    fn create_expense(&self, record: &ExpenseRecord) -> GastosResult<ExpenseRecord>;

    /// Replace the record with `id`
    fn replace_expense(&self, id: i64, record: &ExpenseRecord) -> GastosResult<ExpenseRecord>;

    fn delete_expense(&self, id: i64) -> GastosResult<()>;

    fn get_income(&self) -> GastosResult<MonthlyIncome>;

    fn set_income(&self, income: MonthlyIncome) -> GastosResult<MonthlyIncome>;
}
