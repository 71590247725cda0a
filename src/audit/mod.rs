//! Audit logging for gastos
//!
//! Records every change the client makes through the remote store (expense
//! create/replace/delete, income updates) and every snapshot refresh in an
//! append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity and the
//!   before/after values.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: field-level summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
