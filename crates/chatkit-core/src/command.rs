//! Command definitions and the registration DSL
//!
//! A [`Command`] is a plain data record: names, category, argument schema,
//! description, plus the async handler invoked on dispatch. Commands are
//! immutable once built; the [`CommandBuilder`] is the only way to construct
//! one.

use crate::error::{CoreError, Result};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A declared command argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgument {
    /// Display name used in documentation and help
    pub name: String,
    /// Optional arguments are parenthesized in documentation
    pub optional: bool,
}

impl CommandArgument {
    /// A required argument
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    /// An optional argument
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
        }
    }
}

/// Invocation context passed to command handlers
#[derive(Debug, Clone)]
pub struct CommandEvent {
    /// Platform-specific identifier of the invoking user
    pub user_id: String,
    /// Raw arguments, whitespace-split, prefix and command name stripped
    pub args: Vec<String>,
}

/// Async handler invoked when a command is dispatched
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command and produce the response text
    async fn execute(&self, event: CommandEvent) -> Result<String>;
}

struct HandlerFn<F>(F);

#[async_trait]
impl<F, Fut> CommandHandler for HandlerFn<F>
where
    F: Fn(CommandEvent) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String>> + Send,
{
    async fn execute(&self, event: CommandEvent) -> Result<String> {
        (self.0)(event).await
    }
}

/// Lift an async closure into a [`CommandHandler`]
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn CommandHandler>
where
    F: Fn(CommandEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String>> + Send + 'static,
{
    Arc::new(HandlerFn(f))
}

/// A registered command
///
/// Immutable once registered. The first name is the display name; remaining
/// names are aliases.
#[derive(Clone)]
pub struct Command {
    names: Vec<String>,
    category: String,
    arguments: Vec<CommandArgument>,
    description: String,
    handler: Arc<dyn CommandHandler>,
}

impl Command {
    /// Start building a command with the given display name
    pub fn builder(name: impl Into<String>) -> CommandBuilder {
        CommandBuilder::new(name)
    }

    /// All names, display name first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The display name (first registered name)
    pub fn display_name(&self) -> &str {
        &self.names[0]
    }

    /// The category this command is documented under
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Declared argument schema
    pub fn arguments(&self) -> &[CommandArgument] {
        &self.arguments
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of required arguments
    pub fn required_args(&self) -> usize {
        self.arguments.iter().filter(|a| !a.optional).count()
    }

    /// Check whether `name` matches any of this command's names
    ///
    /// Matching is case-insensitive.
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Run the handler
    pub async fn execute(&self, event: CommandEvent) -> Result<String> {
        self.handler.execute(event).await
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("names", &self.names)
            .field("category", &self.category)
            .field("arguments", &self.arguments)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Command`]
///
/// # Examples
///
/// ```
/// use chatkit_core::{Command, handler_fn};
///
/// let command = Command::builder("Version")
///     .alias("V")
///     .description("Display the version.")
///     .handler(handler_fn(|_event| async move { Ok("0.1.0".to_string()) }))
///     .build("Utility")
///     .unwrap();
///
/// assert_eq!(command.display_name(), "Version");
/// assert!(command.matches("v"));
/// ```
pub struct CommandBuilder {
    names: Vec<String>,
    arguments: Vec<CommandArgument>,
    description: String,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandBuilder {
    /// Create a builder with the display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            arguments: Vec::new(),
            description: String::new(),
            handler: None,
        }
    }

    /// Add an alias
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a required argument
    pub fn argument(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(CommandArgument::required(name));
        self
    }

    /// Declare an optional argument
    pub fn optional_argument(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(CommandArgument::optional(name));
        self
    }

    /// Set the handler
    pub fn handler(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Set the handler from an async closure
    pub fn execute<F, Fut>(self, f: F) -> Self
    where
        F: Fn(CommandEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        self.handler(handler_fn(f))
    }

    /// Finalize the command under a category
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCommand`] when the display name is blank
    /// or no handler was set.
    pub fn build(self, category: impl Into<String>) -> Result<Command> {
        let display_name = self.names[0].clone();

        if display_name.trim().is_empty() {
            return Err(CoreError::InvalidCommand {
                name: display_name,
                reason: "name must not be blank".to_string(),
            });
        }

        let handler = self.handler.ok_or_else(|| CoreError::InvalidCommand {
            name: display_name.clone(),
            reason: "no handler set".to_string(),
        })?;

        Ok(Command {
            names: self.names,
            category: category.into(),
            arguments: self.arguments,
            description: self.description,
            handler,
        })
    }
}
