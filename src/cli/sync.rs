//! Sync command: refresh local snapshots from the store

use super::CommandContext;
use crate::error::{GastosError, GastosResult};
use crate::models::MonthlyIncome;
use crate::services::SyncOutcome;

/// Result of refreshing the user's own data
pub struct OwnSync {
    pub expenses: SyncOutcome,
    /// The income refresh fails on its own; the cached value stays in place
    pub income: Result<MonthlyIncome, GastosError>,
}

/// Refresh the own snapshot, then the income
///
/// Only the expense fetch is fatal.
pub fn sync_own(ctx: &CommandContext<'_>) -> GastosResult<OwnSync> {
    let expenses = ctx.expenses().sync()?;
    let income = ctx.income().refresh();
    Ok(OwnSync { expenses, income })
}

/// Refresh the own snapshot and income, or a guest's snapshot
pub fn handle_sync_command(ctx: &CommandContext<'_>, guest: Option<String>) -> GastosResult<()> {
    if let Some(guest) = guest {
        let records = ctx.expenses().sync_guest(&guest)?;
        println!("Fetched {} expenses of {}", records.len(), guest.trim());
        return Ok(());
    }

    let synced = sync_own(ctx)?;
    println!(
        "Fetched {} expenses (previously {})",
        synced.expenses.fetched, synced.expenses.previous
    );

    match synced.income {
        Ok(income) => println!("Monthly income {:.2}", income.value()),
        Err(e) => {
            let cached = ctx
                .income()
                .cached()?
                .map(|i| format!("{:.2}", i.value()))
                .unwrap_or_else(|| "not set".to_string());
            eprintln!("Warning: could not refresh monthly income ({}); keeping {}", e, cached);
        }
    }
    Ok(())
}
