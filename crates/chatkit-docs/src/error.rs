//! Error types for documentation generation

use thiserror::Error;

/// Result type for documentation operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors that can occur while generating documentation
#[derive(Debug, Error)]
pub enum DocsError {
    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bot assembly failed before documentation could be generated
    #[error(transparent)]
    Core(#[from] chatkit_core::CoreError),
}
