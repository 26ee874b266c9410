//! Error types for the roster solver

use thiserror::Error;

/// Main error type for roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// Error in roster configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The solver backend failed to initialize or crashed
    #[error("Solver backend error: {0}")]
    Solver(String),
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
