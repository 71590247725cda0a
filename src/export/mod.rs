//! Export module for gastos
//!
//! - CSV: the two-party comparison, one line per record
//! - JSON/YAML: the full local snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{default_comparison_file_name, write_comparison_csv};
pub use self::json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_snapshot_yaml;
