//! Built-in string packs
//!
//! One [`Locale`] value holds every string the framework emits on its own.
//! The key set is fixed; translations override fields, they never add keys.

use crate::Language;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Customizable built-in strings
///
/// Fields holding a template document their placeholders; everything else is
/// literal text. Deserializing a partial pack fills missing fields with the
/// English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// The name of the help command
    pub help_name: String,

    /// The category of the help command
    pub help_category: String,

    /// The description of the help command
    pub help_description: String,

    /// The description shown at the top of the help listing
    ///
    /// {0} help command name
    pub help_embed_description: String,

    /// Literal text
    pub unknown_command: String,

    /// Literal text
    pub not_found: String,

    /// Literal text
    pub invalid_format: String,

    /// A string recommending the command with the nearest name
    ///
    /// {0} command name
    pub command_recommendation: String,

    /// Command was provided with invalid arguments
    ///
    /// {0} command name
    pub bad_args: String,

    /// Invalid input for a boolean argument
    ///
    /// {0} truth value
    /// {1} false value
    pub invalid_boolean_arg: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            help_name: "Help".to_string(),
            help_category: "Utility".to_string(),
            help_description: "Display a help menu.".to_string(),
            help_embed_description: "Use `{0} <command>` for more information.".to_string(),

            unknown_command: "Unknown Command".to_string(),
            not_found: "Not found".to_string(),
            invalid_format: "Invalid format".to_string(),

            command_recommendation: "Recommendation: {0}".to_string(),
            bad_args: "Cannot execute `{0}` with these args.".to_string(),
            invalid_boolean_arg: "Must be '{0}' or '{1}'".to_string(),
        }
    }
}

impl Locale {
    /// Get the built-in pack for a language
    ///
    /// English is the only built-in pack; any other language falls back to
    /// the English strings.
    pub fn for_language(language: &Language) -> Self {
        match language {
            Language::English => Self::default(),
            Language::Other(code) => {
                debug!(language = %code, "no built-in locale pack, falling back to English");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let locale = Locale::default();
        assert_eq!(locale.help_name, "Help");
        assert_eq!(locale.help_category, "Utility");
        assert_eq!(locale.unknown_command, "Unknown Command");
        assert_eq!(locale.invalid_boolean_arg, "Must be '{0}' or '{1}'");
    }

    #[test]
    fn test_for_language_fallback() {
        let locale = Locale::for_language(&Language::Other("de".to_string()));
        assert_eq!(locale, Locale::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{ "help_name": "Hilfe", "unknown_command": "Unbekannter Befehl" }"#;
        let locale: Locale = serde_json::from_str(json).unwrap();

        assert_eq!(locale.help_name, "Hilfe");
        assert_eq!(locale.unknown_command, "Unbekannter Befehl");
        // Untouched keys keep the English defaults
        assert_eq!(locale.help_description, "Display a help menu.");
        assert_eq!(locale.bad_args, "Cannot execute `{0}` with these args.");
    }

    #[test]
    fn test_serde_round_trip() {
        let locale = Locale::default();
        let json = serde_json::to_string(&locale).unwrap();
        let parsed: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, locale);
    }
}
