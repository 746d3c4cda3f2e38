/// Error types
///
/// Every fallible path in the gallery ends in one of these enums:
/// - `LoadFailure` when the project document cannot be fetched or parsed
/// - `AssetError` when a single image cannot be loaded or decoded
/// - `ConfigError` when config.toml cannot be read or parsed
use std::path::PathBuf;
use thiserror::Error;

/// The only message the user ever sees when the project list fails to load.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Could not load projects at this time. Please try again later.";

/// The project document could not be obtained.
#[derive(Debug, Error)]
pub enum LoadFailure {
    /// Local document could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote document request did not complete
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote document answered with a non-success status
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Document is not a JSON array of project records
    #[error("malformed project document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single image reference could not be turned into something displayable.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot resolve image reference {reference:?}")]
    InvalidReference { reference: String },

    #[error("failed to read image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download image {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("image {url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("thumbnail task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// config.toml exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
