//! Report CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::{CommandContext, MonthArgs};
use crate::error::{GastosError, GastosResult};
use crate::reports::{ComparisonReport, MonthlyReport};

/// Who to compare with and over which period
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Username to compare with; defaults to the configured guest
    #[arg(short, long)]
    pub guest: Option<String>,

    /// Label shown for the guest; defaults to the username
    #[arg(short, long)]
    pub label: Option<String>,

    /// Fetch the guest's records from the store first
    #[arg(long)]
    pub refresh: bool,

    #[command(flatten)]
    pub period: MonthArgs,
}

impl CompareArgs {
    fn guest<'s>(&'s self, ctx: &'s CommandContext<'_>) -> GastosResult<&'s str> {
        self.guest
            .as_deref()
            .or(ctx.settings.default_guest.as_deref())
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or_else(|| {
                GastosError::Validation(
                    "No guest given; pass --guest or run 'gastos config set-guest <username>'".into(),
                )
            })
    }

    /// Generate the comparison from the snapshots, refreshing the guest if asked
    pub fn build_report(&self, ctx: &CommandContext<'_>) -> GastosResult<ComparisonReport> {
        let guest = self.guest(ctx)?;
        let expenses = ctx.expenses();

        let theirs = if self.refresh {
            expenses.sync_guest(guest)?
        } else {
            expenses.guest_snapshot(guest)?
        };
        let mine = expenses.list(None)?;

        let label = ctx.settings.guest_label_for(self.label.as_deref(), Some(guest));
        Ok(ComparisonReport::generate(
            &mine,
            &theirs,
            self.period.resolve()?,
            &ctx.settings.primary_label,
            &label,
            &ctx.settings.currency_symbol,
        ))
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly dashboard: income, spending and per-category groups
    #[command(alias = "dashboard")]
    Monthly {
        #[command(flatten)]
        period: MonthArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare spending per category with another user
    Compare(CompareArgs),
}

/// Handle a report command
pub fn handle_report_command(ctx: &CommandContext<'_>, cmd: ReportCommands) -> GastosResult<()> {
    match cmd {
        ReportCommands::Monthly { period, output } => {
            let records = ctx.expenses().list(None)?;
            let income = ctx.income().cached()?;
            let report = MonthlyReport::generate(&records, period.resolve()?, income, ctx.settings);

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    GastosError::Export(format!("Failed to create file {}: {}", path.display(), e))
                })?;
                report.export_csv(BufWriter::new(file))?;
                println!("Report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Compare(args) => {
            let report = args.build_report(ctx)?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}
