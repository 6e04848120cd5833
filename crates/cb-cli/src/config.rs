use crate::error::{CliError, Result as CliErrorResult};
use crate::log_level::LogLevel;

use std::path::{Path, PathBuf};

use cb_core::Actor;
use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// CLI configuration loaded from a TOML file
///
/// Every field is optional; a missing file yields the defaults so the tool
/// works against a local server with zero setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub server_url: Option<String>,

    /// Attribution sent with status updates
    #[serde(default)]
    pub actor_email: Option<String>,
    #[serde(default)]
    pub actor_first_name: Option<String>,
    #[serde(default)]
    pub actor_last_name: Option<String>,

    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load from an explicit path, or the default location if none is given
    ///
    /// A missing file is not an error; a file that fails to parse is.
    pub fn load(path: Option<&Path>) -> CliErrorResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| CliError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> CliErrorResult<Self> {
        toml::from_str(text).map_err(|e| CliError::Config {
            message: format!("Invalid config: {e}"),
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("caseboard").join("config.toml"))
    }

    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn actor(&self) -> Actor {
        Actor {
            email: self
                .actor_email
                .clone()
                .unwrap_or_else(|| "cb-cli@localhost".to_string()),
            first_name: self.actor_first_name.clone(),
            last_name: self.actor_last_name.clone(),
            avatar_url: None,
        }
    }
}
