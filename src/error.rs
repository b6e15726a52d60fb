//! Error types for the launcher.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while detecting, launching or archiving a game.
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("No Game binary found in {0}")]
    GameNotFound(PathBuf),

    #[error("Failed to stage shim {shim}: {source}")]
    ShimStaging {
        shim: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for launcher operations.
pub type LauncherResult<T> = Result<T, LauncherError>;
