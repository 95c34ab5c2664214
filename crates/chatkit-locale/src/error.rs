//! Error types for locale operations

use thiserror::Error;

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Errors that can occur during locale operations
#[derive(Error, Debug)]
pub enum LocaleError {
    /// A placeholder survived injection because no argument covered its index
    #[error("Placeholder '{placeholder}' left unfilled in template '{template}'")]
    UnfilledPlaceholder {
        placeholder: String,
        template: String,
    },
}
