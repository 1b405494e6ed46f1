//! Error types for h1-counter operations.
//!
//! This module provides the error hierarchy using `thiserror` for argument
//! validation, name resolution, connection setup and the send/receive path.
//! Every error is terminal: the binary reports it and exits with status 1.

use thiserror::Error;

/// Result type alias for h1-counter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad command-line input. No resources were acquired.
    #[error("usage error: {0}")]
    Usage(#[from] UsageError),

    /// Resolution, connection or transfer failure.
    #[error("network error: {0}")]
    Net(#[from] NetError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Argument and option validation errors.
#[derive(Error, Debug)]
pub enum UsageError {
    /// Chunk size is zero or larger than the receive buffer.
    #[error("chunk size {value} must be between 1 and {max}")]
    InvalidChunkSize {
        /// Requested chunk size.
        value: usize,
        /// Receive buffer capacity.
        max: usize,
    },

    /// Unknown counting mode.
    #[error("unknown counting mode: {name}")]
    UnknownMode {
        /// Name of the unknown mode.
        name: String,
    },
}

/// Network errors, one per stage of a session.
#[derive(Error, Debug)]
pub enum NetError {
    /// Name lookup failed.
    #[error("getaddrinfo: {host}:{service}: {reason}")]
    Resolution {
        /// Host that was looked up.
        host: String,
        /// Service (port) that was looked up.
        service: String,
        /// Resolver diagnostic.
        reason: String,
    },

    /// Lookup succeeded but no candidate address accepted a connection.
    #[error("connect: {host}:{service}: no candidate connected after {attempts} attempts: {reason}")]
    Connection {
        /// Host that was connected to.
        host: String,
        /// Service (port) that was connected to.
        service: String,
        /// Number of candidate addresses tried.
        attempts: usize,
        /// Error from the last attempt.
        reason: String,
    },

    /// The request could not be transmitted completely.
    #[error("send failed after {sent} of {total} bytes: {reason}")]
    Send {
        /// Bytes transmitted before the failure.
        sent: usize,
        /// Bytes requested.
        total: usize,
        /// Transport diagnostic.
        reason: String,
    },

    /// The transport reported an error while receiving.
    #[error("receive failed: {reason}")]
    Receive {
        /// Transport diagnostic.
        reason: String,
    },
}

impl From<std::io::Error> for NetError {
    fn from(err: std::io::Error) -> Self {
        Self::Receive {
            reason: err.to_string(),
        }
    }
}
