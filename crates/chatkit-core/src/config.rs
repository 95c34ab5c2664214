//! Bot configuration

use crate::error::{CoreError, Result};
use chatkit_locale::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Authentication token for the messaging platform
    pub token: String,

    /// Command prefix users type before a command name
    pub prefix: String,

    /// Language for built-in strings
    pub language: Language,

    /// Where generated command documentation is written
    ///
    /// Honored by `chatkit_docs::assemble`, which writes the file right
    /// after the bot is built.
    pub docs_path: PathBuf,

    /// Whether `chatkit_docs::assemble` regenerates documentation at startup
    pub generate_docs: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: "!".to_string(),
            language: Language::English,
            docs_path: PathBuf::from("commands.md"),
            generate_docs: true,
        }
    }
}

impl BotConfig {
    /// Create a new configuration builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "token must not be empty".to_string(),
            ));
        }

        if self.prefix.is_empty() {
            return Err(CoreError::ConfigError(
                "prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`BotConfig`]
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    token: Option<String>,
    prefix: Option<String>,
    language: Option<Language>,
    docs_path: Option<PathBuf>,
    generate_docs: Option<bool>,
}

impl BotConfigBuilder {
    /// Set the authentication token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the command prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the language for built-in strings
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the documentation output path
    pub fn docs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.docs_path = Some(path.into());
        self
    }

    /// Enable or disable documentation generation at startup
    pub fn generate_docs(mut self, enabled: bool) -> Self {
        self.generate_docs = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BotConfig> {
        let defaults = BotConfig::default();

        let config = BotConfig {
            token: self.token.unwrap_or(defaults.token),
            prefix: self.prefix.unwrap_or(defaults.prefix),
            language: self.language.unwrap_or(defaults.language),
            docs_path: self.docs_path.unwrap_or(defaults.docs_path),
            generate_docs: self.generate_docs.unwrap_or(defaults.generate_docs),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = BotConfig::builder().token("abc123").build().unwrap();

        assert_eq!(config.token, "abc123");
        assert_eq!(config.prefix, "!");
        assert_eq!(config.language, Language::English);
        assert_eq!(config.docs_path, PathBuf::from("commands.md"));
        assert!(config.generate_docs);
    }

    #[test]
    fn test_missing_token_rejected() {
        let result = BotConfig::builder().build();
        assert!(matches!(result, Err(CoreError::ConfigError(_))));

        let result = BotConfig::builder().token("   ").build();
        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let result = BotConfig::builder().token("abc123").prefix("").build();
        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }

    #[test]
    fn test_custom_settings() {
        let config = BotConfig::builder()
            .token("abc123")
            .prefix("$")
            .docs_path("docs/commands.md")
            .generate_docs(false)
            .build()
            .unwrap();

        assert_eq!(config.prefix, "$");
        assert_eq!(config.docs_path, PathBuf::from("docs/commands.md"));
        assert!(!config.generate_docs);
    }
}
