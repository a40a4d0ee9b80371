//! Server configuration.
//!
//! Bind address, database location and logging settings.

use listd_core::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file, created and migrated on start
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// trace|debug|info|warn|error
    #[serde(default = "default_level")]
    pub log_level: String,

    /// Absolute directory for rotating log files; stderr when unset
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> PathBuf {
    PathBuf::from("listd.sqlite3")
}

fn default_level() -> String {
    default_log_level().to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: default_db_path(),
            log_level: default_level(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Create a config with the given port and defaults elsewhere
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
