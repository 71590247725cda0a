//! Export CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use super::report::CompareArgs;
use super::CommandContext;
use crate::error::{GastosError, GastosResult};
use crate::export::{
    default_comparison_file_name, export_snapshot_json, export_snapshot_yaml, write_comparison_csv,
};

/// Snapshot export formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export both sides of a comparison as CSV
    Compare {
        #[command(flatten)]
        args: CompareArgs,

        /// Output file; defaults to gastos-comparativo-<guest>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the whole local snapshot
    All {
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn create(path: &Path) -> GastosResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| GastosError::Export(format!("Failed to create file {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Handle an export command
pub fn handle_export_command(ctx: &CommandContext<'_>, cmd: ExportCommands) -> GastosResult<()> {
    match cmd {
        ExportCommands::Compare { args, output } => {
            let report = args.build_report(ctx)?;
            let rows = report.export_rows();
            let output = output.unwrap_or_else(|| {
                let guest = args.guest.as_deref().or(ctx.settings.default_guest.as_deref());
                PathBuf::from(default_comparison_file_name(guest))
            });

            write_comparison_csv(&rows, create(&output)?)?;
            println!("Exported {} rows to: {}", rows.len(), output.display());
        }

        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create(&output)?;
            match format {
                ExportFormat::Json => export_snapshot_json(ctx.storage, &mut writer, pretty)?,
                ExportFormat::Yaml => export_snapshot_yaml(ctx.storage, &mut writer)?,
            }
            writer.flush()?;
            println!("Snapshot exported to: {}", output.display());
        }
    }

    Ok(())
}
