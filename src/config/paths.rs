//! Path management for gastos
//!
//! ## Path Resolution Order
//!
//! 1. `GASTOS_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (e.g. `~/.config/gastos` on Linux, `%APPDATA%\gastos\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GastosError;

/// Manages all paths used by gastos
#[derive(Debug, Clone)]
pub struct GastosPaths {
    base_dir: PathBuf,
}

impl GastosPaths {
    /// Create a new GastosPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `GASTOS_DATA_DIR` is not set.
    pub fn new() -> Result<Self, GastosError> {
        let base_dir = if let Ok(custom) = std::env::var("GASTOS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create GastosPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding cached snapshots
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding cached guest snapshots
    pub fn guests_dir(&self) -> PathBuf {
        self.data_dir().join("guests")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the cached snapshot of the user's own expenses
    pub fn own_snapshot_file(&self) -> PathBuf {
        self.data_dir().join("own.json")
    }

    /// Get the path to the cached snapshot of a guest's expenses
    pub fn guest_snapshot_file(&self, username: &str) -> PathBuf {
        self.guests_dir().join(format!("{}.json", encode_file_stem(username)))
    }

    /// Get the path to the cached monthly income
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), GastosError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GastosError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.guests_dir())
            .map_err(|e| GastosError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Reversible file stem for a username
///
/// ASCII letters, digits, `-` and `_` are kept; every other byte becomes
/// `%XX`. Distinct usernames never share a stem.
pub fn encode_file_stem(username: &str) -> String {
    username
        .trim()
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}

/// Readable file stem for exported files; lossy
pub fn sanitize_file_stem(username: &str) -> String {
    let stem: String = username
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        stem
    }
}

fn resolve_default_path() -> Result<PathBuf, GastosError> {
    ProjectDirs::from("", "", "gastos")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GastosError::Config("Could not determine a home directory".into()))
}
