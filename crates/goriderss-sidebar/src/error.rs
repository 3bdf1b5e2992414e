//! Error types for the session client and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the session and logout endpoints.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Request never produced a response
    #[error("Session request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Session endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON shape
    #[error("Malformed session response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from loading a sidebar configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`SidebarConfig`](crate::SidebarConfig)
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
