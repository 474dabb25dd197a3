//! Application configuration.

use crate::consts::cli_consts::{
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_SERVER_URL, MIN_POLL_INTERVAL_SECS,
};
use crate::workers::DashboardConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Get the path to the dashboard config file, typically located at ~/.proxy-dashboard/config.json.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to get home directory",
        )
    })?;
    Ok(home_path.join(".proxy-dashboard").join("config.json"))
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the connection manager backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Seconds between the end of one client list fetch and the next.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Config {
    /// Create Config with the given server and poll interval.
    #[allow(unused)]
    pub fn new(server_url: String, poll_interval_secs: u64) -> Self {
        Config {
            server_url,
            poll_interval_secs,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Apply command-line overrides on top of the stored values.
    ///
    /// The poll interval is raised to at least one second.
    pub fn resolve(
        &self,
        server_url: Option<String>,
        poll_interval_secs: Option<u64>,
    ) -> DashboardConfig {
        let server_url = server_url.unwrap_or_else(|| self.server_url.clone());
        let secs = poll_interval_secs
            .unwrap_or(self.poll_interval_secs)
            .max(MIN_POLL_INTERVAL_SECS);
        DashboardConfig::new(server_url, Duration::from_secs(secs))
    }
}
