//! Message dispatch
//!
//! Turns a raw chat message into a command invocation: strips the configured
//! prefix, resolves the command by name, checks required-argument arity, and
//! runs the handler. Messages without the prefix are not commands and are
//! left to the application.

use crate::command::CommandEvent;
use crate::error::Result;
use crate::registry::CommandRegistry;
use chatkit_locale::{Locale, inject};
use chatkit_utils::closest_match;
use tracing::{debug, warn};

/// Maximum edit distance for an unknown-command recommendation
const RECOMMEND_DISTANCE: usize = 2;

/// Outcome of dispatching one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The message was a command; this is the response text
    Response(String),
    /// The message did not carry the command prefix
    NotCommand,
}

/// Resolves and executes commands against a registry
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    locale: &'a Locale,
    prefix: &'a str,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a fully populated registry
    pub fn new(registry: &'a CommandRegistry, locale: &'a Locale, prefix: &'a str) -> Self {
        Self {
            registry,
            locale,
            prefix,
        }
    }

    /// Dispatch one message
    ///
    /// # Errors
    ///
    /// Propagates the handler's error. Unknown commands and bad arity are
    /// reported to the user as localized responses, not as errors.
    pub async fn dispatch(&self, user_id: &str, input: &str) -> Result<Dispatch> {
        let input = input.trim();

        let Some(rest) = input.strip_prefix(self.prefix) else {
            return Ok(Dispatch::NotCommand);
        };

        let mut tokens = rest.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(Dispatch::Response(self.locale.invalid_format.clone()));
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let Some(command) = self.registry.find(name) else {
            warn!(command = name, "unknown command");
            return Ok(Dispatch::Response(self.unknown_command_reply(name)));
        };

        if args.len() < command.required_args() {
            return Ok(Dispatch::Response(inject(
                &self.locale.bad_args,
                &[command.display_name()],
            )));
        }

        debug!(command = command.display_name(), user_id, "dispatching command");

        let event = CommandEvent {
            user_id: user_id.to_string(),
            args,
        };
        let response = command.execute(event).await?;
        Ok(Dispatch::Response(response))
    }

    fn unknown_command_reply(&self, name: &str) -> String {
        match closest_match(name, self.registry.names(), RECOMMEND_DISTANCE) {
            Some(suggestion) => format!(
                "{}\n{}",
                self.locale.unknown_command,
                inject(&self.locale.command_recommendation, &[suggestion])
            ),
            None => self.locale.unknown_command.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn sample_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .category("Utility")
            .command(
                Command::builder("Ping")
                    .description("Respond with pong.")
                    .execute(|_e| async move { Ok("pong".to_string()) }),
            )
            .unwrap()
            .command(
                Command::builder("Echo")
                    .description("Echo the input.")
                    .argument("text")
                    .execute(|e| async move { Ok(e.args.join(" ")) }),
            )
            .unwrap();
        registry
    }

    #[tokio::test]
    async fn test_dispatch_command() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!ping").await.unwrap();
        assert_eq!(result, Dispatch::Response("pong".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_passes_args() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!echo hello world").await.unwrap();
        assert_eq!(result, Dispatch::Response("hello world".to_string()));
    }

    #[tokio::test]
    async fn test_not_a_command_without_prefix() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "just chatting").await.unwrap();
        assert_eq!(result, Dispatch::NotCommand);
    }

    #[tokio::test]
    async fn test_bare_prefix_is_invalid_format() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!").await.unwrap();
        assert_eq!(result, Dispatch::Response("Invalid format".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_command_with_recommendation() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!pign").await.unwrap();
        assert_eq!(
            result,
            Dispatch::Response("Unknown Command\nRecommendation: Ping".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_command_no_recommendation() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!zzzzzzzz").await.unwrap();
        assert_eq!(result, Dispatch::Response("Unknown Command".to_string()));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "!");

        let result = dispatcher.dispatch("u1", "!echo").await.unwrap();
        assert_eq!(
            result,
            Dispatch::Response("Cannot execute `Echo` with these args.".to_string())
        );
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let registry = sample_registry();
        let locale = Locale::default();
        let dispatcher = Dispatcher::new(&registry, &locale, "$$");

        let result = dispatcher.dispatch("u1", "$$ping").await.unwrap();
        assert_eq!(result, Dispatch::Response("pong".to_string()));

        let result = dispatcher.dispatch("u1", "!ping").await.unwrap();
        assert_eq!(result, Dispatch::NotCommand);
    }
}
