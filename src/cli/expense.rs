//! Expense CLI commands

use clap::Subcommand;

use super::{CommandContext, MonthArgs};
use crate::display::{format_amount, format_expense_list};
use crate::error::{GastosError, GastosResult};
use crate::models::{Amount, ExpenseKind};
use crate::services::{ExpenseChanges, NewExpense};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses from the local snapshot
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        period: MonthArgs,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount (e.g., "32.50", "32,50" or "R$ 32,50")
        amount: String,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// fixed or variable
        #[arg(short, long)]
        kind: Option<ExpenseKind>,
    },

    /// Change fields of an existing expense
    Edit {
        id: i64,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        kind: Option<ExpenseKind>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete { id: i64 },
}

fn parse_amount(raw: &str) -> GastosResult<Amount> {
    Amount::parse(raw).map_err(|e| GastosError::Validation(e.to_string()))
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CommandContext<'_>, cmd: ExpenseCommands) -> GastosResult<()> {
    let service = ctx.expenses();
    let symbol = &ctx.settings.currency_symbol;

    match cmd {
        ExpenseCommands::List { period, category } => {
            let mut records = service.list(period.resolve()?)?;
            if let Some(category) = category {
                records.retain(|r| r.category.eq_ignore_ascii_case(category.trim()));
            }

            print!(
                "{}",
                format_expense_list(&records, symbol, &ctx.settings.date_format)
            );
            if !records.is_empty() {
                let total = crate::aggregate::grand_total(&records);
                println!("{} expenses, total {}", records.len(), format_amount(total, symbol));
            }
        }

        ExpenseCommands::Add {
            description,
            amount,
            category,
            kind,
        } => {
            let created = service.add(NewExpense {
                description,
                amount: parse_amount(&amount)?,
                category,
                kind,
            })?;

            println!(
                "Created expense #{}: {} - {} ({})",
                created.id.unwrap_or_default(),
                created.description,
                format_amount(created.amount_value(), symbol),
                created.category
            );
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            kind,
        } => {
            let changes = ExpenseChanges {
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                kind,
            };
            let updated = service.edit(id, changes)?;

            println!(
                "Updated expense #{}: {} - {} ({})",
                id,
                updated.description,
                format_amount(updated.amount_value(), symbol),
                updated.category
            );
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted expense #{}: {}", id, removed.description);
        }
    }

    Ok(())
}
