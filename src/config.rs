//! Loading of API credentials from the local config file.
//!
//! The file is INI formatted with a single `[API]` section:
//!
//! ```ini
//! [API]
//! patient_id = 01234567-89ab-cdef-0123-456789abcdef
//! token = eyJhbGciOi...
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.conf";

/// Settings read from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "API", alias = "api")]
    pub api: ApiSettings,
}

/// The `[API]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// LibreLinkUp connection (patient) identifier.
    pub patient_id: String,
    /// Bearer token for the API.
    pub token: String,
}

impl Settings {
    /// Load settings from the given INI file.
    ///
    /// Fails if the file is missing or either key is absent.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()
            .with_context(|| format!("Failed to read config file {}", path.display()))?
            .try_deserialize::<Settings>()
            .with_context(|| format!("Invalid [API] section in {}", path.display()))?;

        Ok(settings)
    }
}
