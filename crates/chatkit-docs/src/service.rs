//! Documentation generation service
//!
//! Consumes a populated [`CommandRegistry`] and writes a single Markdown
//! document: a title, a legend explaining the argument notation, and one
//! fixed-width table per command category. The output file is overwritten in
//! full on every run; there is no incremental update.

use crate::error::Result;
use crate::table::{extract_row, render_table};
use chatkit_core::{Bot, BotBuilder, CommandRegistry};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const LEGEND: &str = "## Key\n\
| Symbol     | Meaning                    |\n\
| ---------- | -------------------------- |\n\
| (Argument) | This argument is optional. |\n";

/// Rendered documentation for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDoc {
    /// Category name
    pub name: String,
    /// Rendered fixed-width table
    pub table: String,
}

/// Generates the command documentation file
///
/// # Examples
///
/// ```
/// use chatkit_core::{Command, CommandRegistry};
/// use chatkit_docs::DocumentationService;
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .category("Utility")
///     .command(
///         Command::builder("Version")
///             .alias("V")
///             .description("Display the version.")
///             .execute(|_event| async move { Ok("0.1.0".to_string()) }),
///     )
///     .unwrap();
///
/// let service = DocumentationService::new();
/// let document = service.render(&registry);
/// assert!(document.starts_with("# Commands"));
/// assert!(document.contains("| Version, V | <none>    | Display the version. |"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentationService {
    output_path: PathBuf,
}

impl DocumentationService {
    /// Create a service writing to the default `commands.md`
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from("commands.md"),
        }
    }

    /// Create a service writing to a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// The configured output path
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render per-category documentation, categories sorted alphabetically
    pub fn category_docs(&self, registry: &CommandRegistry) -> Vec<CategoryDoc> {
        // BTreeMap keeps categories alphabetical
        let mut by_category: BTreeMap<&str, Vec<_>> = BTreeMap::new();
        for command in registry.commands() {
            by_category
                .entry(command.category())
                .or_default()
                .push(extract_row(command));
        }

        by_category
            .into_iter()
            .map(|(name, rows)| CategoryDoc {
                name: name.to_string(),
                table: render_table(rows),
            })
            .collect()
    }

    /// Render the full Markdown document
    pub fn render(&self, registry: &CommandRegistry) -> String {
        let mut document = format!("# Commands\n\n{LEGEND}\n");

        for category in self.category_docs(registry) {
            document.push_str(&format!("## {}\n{}\n", category.name, category.table));
        }

        document
    }

    /// Render and overwrite the output file
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Io`] when the write fails; callers treat
    /// this as fatal.
    pub fn write(&self, registry: &CommandRegistry) -> Result<()> {
        let document = self.render(registry);
        fs::write(&self.output_path, document)?;

        info!(
            path = %self.output_path.display(),
            categories = registry.categories().len(),
            commands = registry.len(),
            "command documentation written"
        );
        Ok(())
    }
}

impl Default for DocumentationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a bot and honor its documentation configuration
///
/// Builds the bot, then writes the command documentation to
/// `BotConfig::docs_path` when `generate_docs` is set. Applications go
/// through this instead of calling `BotBuilder::build` directly so the docs
/// file is in place before the first message arrives.
///
/// # Errors
///
/// Propagates bot assembly failures and the documentation write failure;
/// both are fatal at startup.
///
/// # Examples
///
/// ```no_run
/// use chatkit_core::Bot;
///
/// # fn main() -> chatkit_docs::Result<()> {
/// let bot = chatkit_docs::assemble(Bot::builder().token("bot-token"))?;
/// # Ok(())
/// # }
/// ```
pub fn assemble(builder: BotBuilder) -> Result<Bot> {
    let bot = builder.build()?;

    if bot.config().generate_docs {
        DocumentationService::with_path(&bot.config().docs_path).write(bot.registry())?;
    }

    Ok(bot)
}
