//! CSV export of the comparison
//!
//! One line per record of both parties, `origin` first. The `id` and
//! `createdAt` columns only appear when at least one row carries them.

use std::io::Write;

use crate::aggregate::ExportRow;
use crate::config::paths::sanitize_file_stem;
use crate::error::GastosResult;

/// File name used when the user does not pick one
pub fn default_comparison_file_name(guest: Option<&str>) -> String {
    let guest = guest
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(sanitize_file_stem)
        .unwrap_or_else(|| "convidado".to_string());
    format!("gastos-comparativo-{}.csv", guest)
}

/// Write export rows as CSV
pub fn write_comparison_csv<W: Write>(rows: &[ExportRow], writer: W) -> GastosResult<()> {
    let with_id = rows.iter().any(|r| r.id.is_some());
    let with_created_at = rows.iter().any(|r| r.created_at.is_some());

    let mut header = vec!["origin"];
    if with_id {
        header.push("id");
    }
    header.extend(["description", "amount", "category"]);
    if with_created_at {
        header.push("createdAt");
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.origin.clone()];
        if with_id {
            record.push(row.id.map(|id| id.to_string()).unwrap_or_default());
        }
        // Amount goes out exactly as received
        record.extend([
            row.description.clone(),
            row.amount.to_string(),
            row.category.clone(),
        ]);
        if with_created_at {
            record.push(row.created_at.clone().unwrap_or_default());
        }
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}
