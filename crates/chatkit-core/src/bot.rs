//! Bot assembly and message handling
//!
//! [`Bot`] ties a populated [`CommandRegistry`] to a [`BotConfig`] and a
//! [`Locale`]. Transport is out of scope here: the messaging-library
//! integration calls [`Bot::handle_message`] for each incoming message and
//! delivers whatever response comes back.
//!
//! # Example
//!
//! ```
//! use chatkit_core::{Bot, Command, CommandRegistry};
//!
//! # fn main() -> chatkit_core::Result<()> {
//! let mut registry = CommandRegistry::new();
//! registry
//!     .category("Utility")
//!     .command(
//!         Command::builder("Version")
//!             .alias("V")
//!             .description("Display the version.")
//!             .execute(|_event| async move { Ok("0.1.0".to_string()) }),
//!     )?;
//!
//! let bot = Bot::builder()
//!     .token("bot-token")
//!     .prefix("!")
//!     .commands(registry)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::command::Command;
use crate::config::{BotConfig, BotConfigBuilder};
use crate::dispatch::{Dispatch, Dispatcher};
use crate::error::Result;
use crate::registry::CommandRegistry;
use chatkit_locale::{Language, Locale, inject};
use std::path::PathBuf;
use tracing::info;

/// A configured bot with its command registry and locale
pub struct Bot {
    config: BotConfig,
    locale: Locale,
    registry: CommandRegistry,
}

impl Bot {
    /// Create a bot builder
    pub fn builder() -> BotBuilder {
        BotBuilder::new()
    }

    /// Handle one incoming message
    ///
    /// Returns `None` when the message does not carry the command prefix,
    /// otherwise the response text to deliver back to the user.
    ///
    /// # Errors
    ///
    /// Propagates a failing command handler.
    pub async fn handle_message(&self, user_id: &str, input: &str) -> Result<Option<String>> {
        let dispatcher = Dispatcher::new(&self.registry, &self.locale, &self.config.prefix);

        match dispatcher.dispatch(user_id, input).await? {
            Dispatch::Response(text) => Ok(Some(text)),
            Dispatch::NotCommand => Ok(None),
        }
    }

    /// The bot configuration
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The active locale pack
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Builder for [`Bot`]
pub struct BotBuilder {
    config: BotConfigBuilder,
    locale: Option<Locale>,
    registry: CommandRegistry,
    register_help: bool,
}

impl BotBuilder {
    fn new() -> Self {
        Self {
            config: BotConfig::builder(),
            locale: None,
            registry: CommandRegistry::new(),
            register_help: true,
        }
    }

    /// Set the authentication token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.token(token);
        self
    }

    /// Set the command prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.prefix(prefix);
        self
    }

    /// Set the language for built-in strings
    pub fn language(mut self, language: Language) -> Self {
        self.config = self.config.language(language);
        self
    }

    /// Override the locale pack directly
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set the documentation output path
    pub fn docs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.docs_path(path);
        self
    }

    /// Enable or disable documentation generation at startup
    pub fn generate_docs(mut self, enabled: bool) -> Self {
        self.config = self.config.generate_docs(enabled);
        self
    }

    /// Enable or disable the auto-registered help command
    pub fn register_help(mut self, enabled: bool) -> Self {
        self.register_help = enabled;
        self
    }

    /// Provide the command registry
    pub fn commands(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Assemble the bot
    ///
    /// Validates the configuration and, unless disabled, registers the
    /// built-in help command from the locale strings. Documentation
    /// generation lives in the docs crate; go through
    /// `chatkit_docs::assemble` to have `generate_docs` honored.
    pub fn build(self) -> Result<Bot> {
        let config = self.config.build()?;
        let locale = self
            .locale
            .unwrap_or_else(|| Locale::for_language(&config.language));
        let mut registry = self.registry;

        if self.register_help {
            let help = build_help_command(&registry, &locale)?;
            registry.register(help)?;
        }

        info!(
            commands = registry.len(),
            prefix = %config.prefix,
            language = %config.language,
            "bot assembled"
        );

        Ok(Bot {
            config,
            locale,
            registry,
        })
    }
}

/// Build the help command from locale strings
///
/// The listing is computed once at build time; the registry is immutable
/// afterwards, so a snapshot is safe.
fn build_help_command(registry: &CommandRegistry, locale: &Locale) -> Result<Command> {
    let mut entries: Vec<(String, String, String)> = registry
        .commands()
        .iter()
        .map(|c| {
            (
                c.category().to_string(),
                c.names().join(", "),
                c.description().to_string(),
            )
        })
        .collect();
    entries.push((
        locale.help_category.clone(),
        locale.help_name.clone(),
        locale.help_description.clone(),
    ));
    entries.sort();

    let mut text = inject(&locale.help_embed_description, &[&locale.help_name]);
    let mut current_category: Option<&str> = None;
    for (category, names, description) in &entries {
        if current_category != Some(category.as_str()) {
            text.push_str("\n\n");
            text.push_str(category);
            current_category = Some(category);
        }
        text.push_str(&format!("\n  {names}: {description}"));
    }

    Command::builder(locale.help_name.clone())
        .description(locale.help_description.clone())
        .execute(move |_event| {
            let text = text.clone();
            async move { Ok(text) }
        })
        .build(locale.help_category.clone())
}
