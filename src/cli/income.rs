//! Income CLI commands

use clap::Subcommand;

use super::CommandContext;
use crate::display::format_amount;
use crate::error::{GastosError, GastosResult};
use crate::models::Amount;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Show the monthly income
    Show {
        /// Fetch it from the store instead of using the cached value
        #[arg(long)]
        refresh: bool,
    },

    /// Set the monthly income (e.g., "5000" or "5000,00")
    Set { amount: String },
}

/// Handle an income command
pub fn handle_income_command(ctx: &CommandContext<'_>, cmd: IncomeCommands) -> GastosResult<()> {
    let service = ctx.income();
    let symbol = &ctx.settings.currency_symbol;

    match cmd {
        IncomeCommands::Show { refresh } => {
            let income = if refresh {
                Some(service.refresh()?)
            } else {
                service.cached()?
            };

            match income {
                Some(income) => println!("Monthly income: {}", format_amount(income.value(), symbol)),
                None => println!("Monthly income not set. Run 'gastos sync' or 'gastos income set <amount>'."),
            }
        }

        IncomeCommands::Set { amount } => {
            let value = Amount::parse(&amount)
                .map_err(|e| GastosError::Validation(e.to_string()))?
                .value();
            let stored = service.set(value)?;
            println!("Monthly income set to {}", format_amount(stored.value(), symbol));
        }
    }

    Ok(())
}
