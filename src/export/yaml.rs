//! YAML export of the local snapshot

use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::export::json::SnapshotExport;
use crate::storage::Storage;

/// Export the local snapshot to YAML with a short header comment
pub fn export_snapshot_yaml<W: Write>(storage: &Storage, mut writer: W) -> GastosResult<()> {
    let export = SnapshotExport::from_storage(storage)?;

    writeln!(writer, "# gastos snapshot export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| GastosError::Export(e.to_string()))
}
