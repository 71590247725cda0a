//! Reports for gastos
//!
//! Thin views over the aggregation engine: the monthly dashboard and the
//! comparison with another user.

pub mod comparison;
pub mod monthly;
pub mod summary;

pub use comparison::ComparisonReport;
pub use monthly::MonthlyReport;
pub use summary::IncomeSummary;
