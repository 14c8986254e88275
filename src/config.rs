//! Optional TOML configuration for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NexpError, Result};

/// Settings the CLI reads from a config file; flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory under which fresh export directories are created.
    /// Defaults to the system temp directory when unset.
    pub export_root: Option<PathBuf>,
    /// Pretty-print `export.json`.
    pub pretty: bool,
}

impl Config {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        toml::from_str(&data).map_err(|e| NexpError::Config(format!("invalid config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.export_root {
            if root.as_os_str().is_empty() {
                return Err(NexpError::Config(
                    "export_root must not be empty".to_string(),
                ));
            }
            if root.is_file() {
                return Err(NexpError::Config(format!(
                    "export_root {} is a file, expected a directory",
                    root.display()
                )));
            }
        }
        Ok(())
    }
}
