//! Command documentation generator for chatkit
//!
//! Reflects the command registry into a Markdown document with one
//! fixed-width table per category, written to a single output file. This is
//! an administrative startup task: the registry is fully populated first, the
//! file is overwritten in full, and a failed write is fatal to the caller.

mod error;
mod service;
mod table;

pub use error::{DocsError, Result};
pub use service::{CategoryDoc, DocumentationService, assemble};
