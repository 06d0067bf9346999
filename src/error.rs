//! Error types for the Tax Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself is total: every input profile produces a
//! result (unrecognized filing statuses fall back to the married treatment
//! and numeric edge cases are handled by clamping), so the only errors that
//! exist belong to the server plumbing around it.

use thiserror::Error;

/// The main error type for the Tax Calculation Engine.
///
/// # Example
///
/// ```
/// use tax_engine::error::EngineError;
///
/// let error = EngineError::InvalidListenAddr {
///     value: "not-an-addr".to_string(),
///     source: "256.0.0.1:80".parse::<std::net::SocketAddr>().unwrap_err(),
/// };
/// assert!(error.to_string().contains("not-an-addr"));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured listen address could not be parsed.
    #[error("Invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        /// The address string that failed to parse.
        value: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },

    /// An I/O error occurred while binding or serving.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
