//! Error types for the THERMLINK runtime

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type ThermResult<T> = Result<T, ThermError>;

/// Top-level error taxonomy.
///
/// `MalformedMessage` is the only kind a subscriber recovers from locally:
/// the offending payload is discarded, the store is left untouched, and
/// processing continues with the next message. Everything else propagates to
/// the role driver, which treats it as fatal.
#[derive(Error, Debug)]
pub enum ThermError {
    /// Structural decode failure: truncation, missing required field, or an
    /// invalid nested length.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] crate::codec::CodecError),

    /// Publish/subscribe/poll failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Scheduler lifecycle failure (signal handler installation, etc.).
    #[error("scheduler error: {0}")]
    Scheduler(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
