//! Error types for inventory generation.

use thiserror::Error;

/// Errors that can occur while producing an inventory.
#[derive(Debug, Error)]
pub enum Error {
    /// No known Tailscale binary for the current platform.
    #[error("{os} is not currently supported; tailscale-inventory runs on Linux and macOS")]
    UnsupportedPlatform { os: String },

    /// The status source could not be invoked or reported failure.
    #[error("tailscale status unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The status output did not match the expected schema.
    #[error("malformed tailscale status: {reason}")]
    MalformedInput { reason: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedInput {
            reason: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
