//! Configuration service for loading and generating config files.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::comments::trim_comments;
use super::env::{expand_with, process_env};
use super::Config;
use crate::error::ConfigError;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path (`~/.config/ikago/config.json`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ikago")
            .join("config.json")
    }

    /// Load configuration from file, expanding variables from the process
    /// environment.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        Self::load_with_env(path, process_env)
    }

    /// Load configuration from file, resolving `$NAME` / `${NAME}` through `lookup`.
    ///
    /// Comment lines are stripped, variables expanded, then the remaining
    /// text is decoded as JSON. Keys missing from the payload keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Io`] if the file cannot be opened, stat'ed or read
    /// - [`ConfigError::EmptyFile`] if the file has zero length
    /// - [`ConfigError::Filter`] if comment stripping fails
    /// - [`ConfigError::Parse`] if the expanded text is not a valid payload
    pub fn load_with_env<F>(path: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file = File::open(path)?;

        let size = file.metadata()?.len();
        if size == 0 {
            return Err(ConfigError::EmptyFile);
        }
        debug!("Opened config {} ({} bytes)", path.display(), size);

        let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
        file.read_to_end(&mut buffer)?;
        drop(file);

        let buffer = trim_comments(&buffer)?;
        debug!("{} bytes left after trimming comments", buffer.len());

        let buffer = expand_with(&buffer, lookup);

        // Decode through a Value so a repeated key keeps its last value
        let value: serde_json::Value = serde_json::from_slice(&buffer)?;
        let config = Config::deserialize(value)?;
        debug!(
            "Loaded config: method={}, server={}, listen_devices=[{}]",
            config.method,
            config.server,
            config.listen_devs_string()
        );

        Ok(config)
    }

    /// Generate the sample configuration file at the specified path.
    pub fn generate_at(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::default_config_content())
    }

    /// Sample configuration content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# IkaGo configuration file
# Lines starting with '#' are ignored. $NAME and ${NAME} are replaced
# with environment variables before the JSON below is parsed.
{
  # pcap devices to capture on, in priority order
  "listen-devices": [],
  # Device and port used to reach the server
  "upstream-device": "",
  "upstream-port": 0,
  # Encryption method and its password
  "method": "plain",
  "password": "",
  "verbose": false,
  # Packet filters, e.g. "192.168.1.0/24" or ":80"
  "filters": [],
  "server": "",
  "listen-port": 0
}
"#
    }
}
