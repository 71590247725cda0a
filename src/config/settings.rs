//! User settings for gastos
//!
//! Manages the remote store location, party labels, the reference category
//! list used by the dashboard and display preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::GastosPaths;
use crate::error::GastosError;

/// Default literal used for the secondary party when no label is given
pub const DEFAULT_GUEST_LABEL: &str = "Guest";

/// User settings for gastos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the remote expense store
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Label used for the user's own records in comparisons and exports
    #[serde(default = "default_primary_label")]
    pub primary_label: String,

    /// Label used for the guest when no username is available
    #[serde(default = "default_guest_label")]
    pub guest_label: String,

    /// Username compared against when none is passed explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_guest: Option<String>,

    /// Reference category list, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Category whose total counts as "saved" on the dashboard
    #[serde(default = "default_investment_category")]
    pub investment_category: String,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Timeout for requests to the remote store
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_primary_label() -> String {
    "Eu".to_string()
}

fn default_guest_label() -> String {
    DEFAULT_GUEST_LABEL.to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Investimentos",
        "Alimentação",
        "Transporte",
        "Presentes",
        "Cuidados Pessoais",
        "Lazer",
        "Custos Fixos",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_investment_category() -> String {
    "Investimentos".to_string()
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            primary_label: default_primary_label(),
            guest_label: default_guest_label(),
            default_guest: None,
            categories: default_categories(),
            investment_category: default_investment_category(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &GastosPaths) -> Result<Self, GastosError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GastosError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GastosError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GastosPaths) -> Result<(), GastosError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GastosError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GastosError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Set the remote store URL after checking it looks like an http(s) URL
    pub fn set_api_base_url(&mut self, url: &str) -> Result<(), GastosError> {
        self.api_base_url = validate_api_base_url(url)?;
        Ok(())
    }

    /// Reject values that would break rendering later
    pub fn validate(&self) -> Result<(), GastosError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(GastosError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Label for the guest party: the explicit label, then the username, then the default
    pub fn guest_label_for(&self, label: Option<&str>, username: Option<&str>) -> String {
        label
            .filter(|l| !l.trim().is_empty())
            .or(username.filter(|u| !u.trim().is_empty()))
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| self.guest_label.clone())
    }
}

/// Trimmed http(s) URL without a trailing slash
pub fn validate_api_base_url(url: &str) -> Result<String, GastosError> {
    let url = url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| GastosError::Config(format!("Invalid URL '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(GastosError::Config(format!(
            "Unsupported URL scheme '{}', use http or https",
            other
        ))),
    }
}

/// Whether chrono understands every specifier in `format`
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.guest_label, "Guest");
        assert_eq!(settings.categories.len(), 7);
        assert_eq!(settings.categories[0], settings.investment_category);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_guest = Some("bob".into());
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_guest.as_deref(), Some("bob"));
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_base_url": "https://gastos.example"}"#).unwrap();
        assert_eq!(settings.api_base_url, "https://gastos.example");
        assert_eq!(settings.primary_label, "Eu");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_set_api_base_url() {
        let mut settings = Settings::default();
        settings.set_api_base_url("https://api.example.com/").unwrap();
        assert_eq!(settings.api_base_url, "https://api.example.com");

        assert!(settings.set_api_base_url("ftp://example.com").is_err());
        assert!(settings.set_api_base_url("not a url").is_err());
    }

    #[test]
    fn test_guest_label_fallbacks() {
        let settings = Settings::default();
        assert_eq!(settings.guest_label_for(Some("Ana"), Some("bob")), "Ana");
        assert_eq!(settings.guest_label_for(Some("  "), Some("bob")), "bob");
        assert_eq!(settings.guest_label_for(None, None), "Guest");
        assert_eq!(settings.guest_label_for(Some(""), Some("")), "Guest");
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(is_valid_date_format("%Y-%m-%d %H:%M"));
        assert!(!is_valid_date_format("%Q"));

        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_validate_api_base_url_leaves_settings_alone() {
        let settings = Settings::default();
        assert_eq!(
            validate_api_base_url(" http://other.example:9/ ").unwrap(),
            "http://other.example:9"
        );
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8000");
    }
}
