//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and report layers.

pub mod audit;
pub mod config;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;
pub mod sync;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use sync::handle_sync_command;

use clap::Args;

use crate::config::Settings;
use crate::error::{GastosError, GastosResult};
use crate::models::Month;
use crate::remote::ExpenseStore;
use crate::services::{ExpenseService, IncomeService};
use crate::storage::Storage;

/// What every command handler works with
pub struct CommandContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    /// `None` when no access token was given
    pub store: Option<&'a dyn ExpenseStore>,
}

impl<'a> CommandContext<'a> {
    pub fn expenses(&self) -> ExpenseService<'a> {
        match self.store {
            Some(store) => ExpenseService::online(self.storage, store),
            None => ExpenseService::new(self.storage),
        }
    }

    pub fn income(&self) -> IncomeService<'a> {
        match self.store {
            Some(store) => IncomeService::online(self.storage, store),
            None => IncomeService::new(self.storage),
        }
    }
}

/// Month selection shared by listing and report commands
#[derive(Args, Debug, Clone, Default)]
pub struct MonthArgs {
    /// Month to show (YYYY-MM or MM/YYYY); defaults to the current month
    #[arg(short, long, conflicts_with = "all")]
    pub month: Option<String>,

    /// Include every record, dated or not
    #[arg(short, long)]
    pub all: bool,
}

impl MonthArgs {
    /// The month filter to apply; `None` means no filter
    pub fn resolve(&self) -> GastosResult<Option<Month>> {
        if self.all {
            return Ok(None);
        }
        match &self.month {
            Some(raw) => Month::parse(raw)
                .map(Some)
                .map_err(|e| GastosError::Validation(e.to_string())),
            None => Ok(Some(Month::current())),
        }
    }
}
