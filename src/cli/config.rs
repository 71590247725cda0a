//! Settings CLI commands

use clap::Subcommand;

use crate::config::{GastosPaths, Settings};
use crate::error::GastosResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current settings and where they live
    Show,

    /// Set the base URL of the remote store
    SetUrl { url: String },

    /// Set the username compared against by default; omit to clear it
    SetGuest { username: Option<String> },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &GastosPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> GastosResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Store URL:       {}", settings.api_base_url);
            println!("Primary label:   {}", settings.primary_label);
            println!(
                "Default guest:   {}",
                settings.default_guest.as_deref().unwrap_or("(none)")
            );
            println!("Currency:        {}", settings.currency_symbol);
            println!("Investments:     {}", settings.investment_category);
            println!("Categories:      {}", settings.categories.join(", "));
        }

        ConfigCommands::SetUrl { url } => {
            settings.set_api_base_url(&url)?;
            settings.save(paths)?;
            println!("Store URL set to {}", settings.api_base_url);
        }

        ConfigCommands::SetGuest { username } => {
            settings.default_guest = username
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty());
            settings.save(paths)?;
            match &settings.default_guest {
                Some(guest) => println!("Default guest set to {}", guest),
                None => println!("Default guest cleared"),
            }
        }
    }

    Ok(())
}
