use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gastos::cli::{
    handle_audit_command, handle_config_command, handle_expense_command, handle_export_command,
    handle_income_command, handle_report_command, handle_sync_command, CommandContext,
    ConfigCommands, ExpenseCommands, ExportCommands, IncomeCommands, ReportCommands,
};
use gastos::config::settings::validate_api_base_url;
use gastos::config::{GastosPaths, Settings};
use gastos::remote::{Credential, ExpenseStore, HttpExpenseStore};
use gastos::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Track expenses against your monthly income from the terminal",
    long_about = "gastos keeps a local snapshot of the expenses stored on a remote \
                  server, summarizes them month by month against your income and \
                  compares your spending with another user's."
)]
struct Cli {
    /// Access token for the remote store
    #[arg(long, global = true, env = "GASTOS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the configured store URL for this run
    #[arg(long, global = true, env = "GASTOS_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        /// Guest whose cached snapshot feeds the comparison view
        #[arg(short, long)]
        guest: Option<String>,
    },

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Fetch your expenses (or a guest's) into the local snapshot
    Sync {
        /// Fetch this user's expenses instead of your own
        #[arg(short, long)]
        guest: Option<String>,
    },

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Monthly and comparison reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GastosPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    // The override only reaches the HTTP client; settings on disk keep their URL
    let store_url = match cli.api_url.as_deref() {
        Some(url) => validate_api_base_url(url)?,
        None => settings.api_base_url.clone(),
    };

    let Some(command) = cli.command else {
        println!("gastos - expenses against your monthly income");
        println!();
        println!("Run 'gastos --help' for usage information.");
        println!("Run 'gastos sync' to fetch your expenses, then 'gastos tui'.");
        return Ok(());
    };

    let storage = Storage::new(paths)?;
    storage.load_all()?;

    // Commands that only read the snapshot work without a token
    let http = match cli.token {
        Some(token) => Some(HttpExpenseStore::new(
            &store_url,
            &Credential::new(token)?,
            Duration::from_secs(settings.request_timeout_secs),
        )?),
        None => None,
    };

    match command {
        Commands::Config(cmd) => handle_config_command(storage.paths(), &mut settings, cmd)?,
        Commands::Tui { guest } => {
            let guest = guest.or_else(|| settings.default_guest.clone());
            gastos::tui::run_tui(&storage, &settings, guest.as_deref())?;
        }
        Commands::Expense(cmd) => handle_expense_command(&context(&storage, &settings, &http), cmd)?,
        Commands::Sync { guest } => handle_sync_command(&context(&storage, &settings, &http), guest)?,
        Commands::Income(cmd) => handle_income_command(&context(&storage, &settings, &http), cmd)?,
        Commands::Report(cmd) => handle_report_command(&context(&storage, &settings, &http), cmd)?,
        Commands::Export(cmd) => handle_export_command(&context(&storage, &settings, &http), cmd)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
    }

    Ok(())
}

fn context<'a>(
    storage: &'a Storage,
    settings: &'a Settings,
    http: &'a Option<HttpExpenseStore>,
) -> CommandContext<'a> {
    CommandContext {
        storage,
        settings,
        store: http.as_ref().map(|s| s as &dyn ExpenseStore),
    }
}
