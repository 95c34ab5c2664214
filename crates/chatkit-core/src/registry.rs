//! Command registry
//!
//! An ordered collection of [`Command`]s. Registration order is preserved so
//! documentation output stays deterministic; lookup is case-insensitive
//! across every name a command carries.

use crate::command::{Command, CommandBuilder};
use crate::error::{CoreError, Result};

/// Ordered collection of registered commands
///
/// # Examples
///
/// ```
/// use chatkit_core::{Command, CommandRegistry};
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
/// assert!(registry.find("version").is_some());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a category scope for registering commands
    pub fn category(&mut self, name: impl Into<String>) -> CategoryScope<'_> {
        CategoryScope {
            registry: self,
            name: name.into(),
        }
    }

    /// Register a fully built command
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateCommand`] when any of the command's
    /// names is already taken within its category. Names must stay unique per
    /// category so the generated documentation is unambiguous.
    pub fn register(&mut self, command: Command) -> Result<()> {
        for existing in self.commands.iter().filter(|c| c.category() == command.category()) {
            if let Some(name) = command.names().iter().find(|n| existing.matches(n.as_str())) {
                return Err(CoreError::DuplicateCommand {
                    name: name.clone(),
                    category: command.category().to_string(),
                });
            }
        }

        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by any of its names, case-insensitive
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(name))
    }

    /// All registered commands in registration order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Every registered name, display names and aliases alike
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .flat_map(|c| c.names().iter().map(String::as_str))
    }

    /// Distinct category names in first-registration order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for command in &self.commands {
            if !seen.contains(&command.category()) {
                seen.push(command.category());
            }
        }
        seen
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Registration scope tied to one category
pub struct CategoryScope<'a> {
    registry: &'a mut CommandRegistry,
    name: String,
}

impl CategoryScope<'_> {
    /// Build and register a command in this category
    pub fn command(self, builder: CommandBuilder) -> Result<Self> {
        let command = builder.build(self.name.clone())?;
        self.registry.register(command)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::handler_fn;
    use std::sync::Arc;

    fn noop() -> Arc<dyn crate::command::CommandHandler> {
        handler_fn(|_event| async move { Ok(String::new()) })
    }

    fn sample(name: &str, category: &str) -> Command {
        Command::builder(name)
            .handler(noop())
            .build(category)
            .unwrap()
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = CommandRegistry::new();
        registry.register(sample("Version", "Utility")).unwrap();

        assert!(registry.find("Version").is_some());
        assert!(registry.find("VERSION").is_some());
        assert!(registry.find("missing").is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = CommandRegistry::new();
        registry.register(sample("Version", "Utility")).unwrap();

        let result = registry.register(sample("version", "Utility"));
        assert!(matches!(result, Err(CoreError::DuplicateCommand { .. })));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                Command::builder("Version")
                    .alias("V")
                    .handler(noop())
                    .build("Utility")
                    .unwrap(),
            )
            .unwrap();

        let result = registry.register(
            Command::builder("Verbose")
                .alias("v")
                .handler(noop())
                .build("Utility")
                .unwrap(),
        );
        assert!(matches!(result, Err(CoreError::DuplicateCommand { .. })));
    }

    #[test]
    fn test_same_name_different_category_allowed() {
        let mut registry = CommandRegistry::new();
        registry.register(sample("Info", "Utility")).unwrap();
        registry.register(sample("Info", "Admin")).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_category_scope_dsl() {
        let mut registry = CommandRegistry::new();
        registry
            .category("Utility")
            .command(Command::builder("Ping").execute(|_e| async move { Ok("pong".into()) }))
            .unwrap()
            .command(Command::builder("Echo").execute(|e| async move { Ok(e.args.join(" ")) }))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("echo").unwrap().category(), "Utility");
    }

    #[test]
    fn test_categories_in_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.register(sample("B", "Second")).unwrap();
        registry.register(sample("A", "First")).unwrap();
        registry.register(sample("C", "Second")).unwrap();

        assert_eq!(registry.categories(), vec!["Second", "First"]);
    }

    #[test]
    fn test_names_includes_aliases() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                Command::builder("Version")
                    .alias("V")
                    .handler(noop())
                    .build("Utility")
                    .unwrap(),
            )
            .unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Version", "V"]);
    }
}
