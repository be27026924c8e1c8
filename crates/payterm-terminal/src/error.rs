//! # Terminal Error Types
//!
//! Error types for the terminal integration boundary.
//!
//! Per the integration's failure model there is no retry policy and no
//! transient/permanent split: every failure is terminal for the current
//! attempt and surfaces directly to the caller. The only recovery is the
//! service clearing its in-flight flag so a new attempt can be made.

use thiserror::Error;

use payterm_core::ValidationError;

/// Errors crossing the terminal boundary.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Amount validation failed before the terminal was invoked.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A payment attempt is already in flight.
    #[error("a payment is already in progress")]
    Busy,

    /// The terminal has not been initialized yet.
    #[error("terminal not initialized")]
    NotInitialized,

    /// The vendor integration reported a failure or threw; the message is
    /// passed through verbatim.
    #[error("terminal error: {0}")]
    Client(String),

    /// Configuration file was present but unusable.
    #[error("invalid terminal config: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results with TerminalError.
pub type TerminalResult<T> = Result<T, TerminalError>;
