//! Budget configuration loading
//!
//! Reads the budget document from disk. `.yaml`/`.yml` files go through
//! serde_yaml, everything else through serde_json. Every failure, from a
//! missing file to a typo in an amount, is a [`PaydayError::ConfigLoad`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{PaydayError, PaydayResult};
use crate::models::BudgetConfig;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Load the budget configuration from a file
pub fn load_config(path: &Path) -> PaydayResult<BudgetConfig> {
    if !path.exists() {
        return Err(PaydayError::config_load(path, "file not found"));
    }

    let file = File::open(path).map_err(|e| PaydayError::config_load(path, e))?;
    let reader = BufReader::new(file);

    let format = ConfigFormat::from_path(path);
    let config: BudgetConfig = match format {
        ConfigFormat::Json => {
            serde_json::from_reader(reader).map_err(|e| PaydayError::config_load(path, e))?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_reader(reader).map_err(|e| PaydayError::config_load(path, e))?
        }
    };

    tracing::info!(
        path = %path.display(),
        ?format,
        paydays = config.paydays.len(),
        charities = config.charities.len(),
        expenses = config.expenses.len(),
        bills = config.bills.len(),
        "loaded budget config"
    );

    if config.is_empty() {
        tracing::warn!(path = %path.display(), "budget config has no entries");
    }

    Ok(config)
}
