//! Connection settings beyond the positional CLI arguments.
//!
//! Defaults suit the classroom setup (local server, empty password). An
//! optional `hms.yaml` in the working directory overrides them, and the
//! `HMS_DB_HOST` / `HMS_DB_PASSWORD` environment variables override the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "hms.yaml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Host the database server listens on.
    #[serde(default = "default_host")]
    pub host: String,
    /// Password for the database user.
    #[serde(default)]
    pub password: String,
    /// Socket connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
            password: String::new(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Config {
    /// Load `hms.yaml` from the working directory if present, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Path::new(CONFIG_FILE))?.with_env_overrides())
    }

    /// Load from a specific path, falling back to defaults when the file is
    /// missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("could not parse {}", path.display()))
    }

    /// Apply `HMS_DB_HOST` and `HMS_DB_PASSWORD` on top of the loaded values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HMS_DB_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(password) = std::env::var("HMS_DB_PASSWORD") {
            self.password = password;
        }
        self
    }
}
