//! Error types for command registration and dispatch

use thiserror::Error;

/// Framework-level errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A command name collides with one already registered in the category
    #[error("Duplicate command name '{name}' in category '{category}'")]
    DuplicateCommand { name: String, category: String },

    /// A command definition is incomplete
    #[error("Invalid command '{name}': {reason}")]
    InvalidCommand { name: String, reason: String },

    /// A command handler failed
    ///
    /// The framework never constructs this itself; application handlers
    /// return it for their own failures.
    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Result type alias for framework operations
pub type Result<T> = std::result::Result<T, CoreError>;
