//! Configuration loading for the ride selector CLI

use std::fs;
use std::path::{Path, PathBuf};

use ride_core::catalog::Lang;
use ride_core::errors::{RideError, RideResult};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ride-selector.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "ride_core=info,ride_cli=info,warn";

/// Settings read from `ride-selector.toml`. Every key is optional.
///
/// ```toml
/// language = "zh"
/// catalog_path = "data/catalog.json"
/// export_dir = "reports"
/// log_filter = "ride_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub language: Lang,
    pub catalog_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub log_filter: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            language: Lang::En,
            catalog_path: None,
            export_dir: PathBuf::from("."),
            log_filter: None,
        }
    }
}

impl SelectorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RideResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RideError::config_error(path.display().to_string(), e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| RideError::config_error(path.display().to_string(), e.to_string()))
    }

    /// Load the explicit file if given, else `ride-selector.toml` in `dir`, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> RideResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
