//! Config file location for the payday calculator
//!
//! ## Resolution Order
//!
//! 1. An explicit path (`--config` or the `PAYDAY_CONFIG` environment variable)
//! 2. `config.json` in the current working directory
//! 3. `config.json` in the platform config directory
//!    (e.g. `~/.config/payday-calculator/` on Linux)
//!
//! If none of these exist the working-directory path is returned, so the load
//! error names the place we looked first.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{PaydayError, PaydayResult};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding an explicit config path
pub const CONFIG_ENV_VAR: &str = "PAYDAY_CONFIG";

/// Directories searched for the config file
#[derive(Debug, Clone)]
pub struct PaydayPaths {
    working_dir: PathBuf,
    user_config_dir: Option<PathBuf>,
}

impl PaydayPaths {
    /// Create a new PaydayPaths from the process working directory and the
    /// platform config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> PaydayResult<Self> {
        let working_dir = std::env::current_dir().map_err(|e| {
            PaydayError::config_load(CONFIG_FILE_NAME, format!("no working directory: {}", e))
        })?;
        let user_config_dir = ProjectDirs::from("", "", "payday-calculator")
            .map(|dirs| dirs.config_dir().to_path_buf());

        Ok(Self {
            working_dir,
            user_config_dir,
        })
    }

    /// Create PaydayPaths with custom directories (useful for testing)
    pub fn with_dirs(working_dir: PathBuf, user_config_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            user_config_dir,
        }
    }

    /// `config.json` in the working directory
    pub fn working_config_file(&self) -> PathBuf {
        self.working_dir.join(CONFIG_FILE_NAME)
    }

    /// `config.json` in the user config directory, if the platform has one
    pub fn user_config_file(&self) -> Option<PathBuf> {
        self.user_config_dir
            .as_ref()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Pick the config file to load
    pub fn resolve_config_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return self.absolutize(path);
        }

        let local = self.working_config_file();
        if local.exists() {
            return local;
        }

        match self.user_config_file() {
            Some(user) if user.exists() => user,
            _ => local,
        }
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}
