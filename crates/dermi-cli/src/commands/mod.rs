pub mod config;
pub mod ping;
pub mod process;

use std::path::Path;

use anyhow::{Context, Result};
use dermi_core::config::UploadConfig;

/// Read an `UploadConfig` from a TOML file, or fall back to defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<UploadConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(UploadConfig::default()),
    }
}
