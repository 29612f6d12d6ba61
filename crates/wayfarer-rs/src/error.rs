//! Error taxonomy shared across the workspace.
//!
//! Each variant maps to a different recovery path: `Configuration` and
//! `Backend` are reported and the session keeps accepting input,
//! `InvalidInput` is recovered by re-prompting, and `Io` ends the process.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the session core and the completion client.
#[derive(Debug, Error)]
pub enum Error {
    /// A persona template or client setting is unusable as configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// User-supplied input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The completion backend could not produce a reply.
    #[error("backend unavailable: {0}")]
    Backend(String),

    /// Terminal or stream failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
