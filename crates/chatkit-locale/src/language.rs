//! Language selection for locale packs
//!
//! English is the only built-in pack; other languages are addressed through
//! the `Other` variant and fall back to English strings until an application
//! supplies its own pack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages for built-in strings
///
/// # Examples
///
/// ```
/// use chatkit_locale::Language;
///
/// let lang = Language::English;
/// assert_eq!(lang.code(), "en");
/// assert_eq!(lang.name(), "English");
///
/// // Parse from string
/// let parsed = Language::from_code("en");
/// assert_eq!(parsed, Language::English);
///
/// // Custom language
/// let custom = Language::Other("de".to_string());
/// assert_eq!(custom.code(), "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Other languages (ISO 639-1 code)
    Other(String),
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Other(code) => code,
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Other(code) => code,
        }
    }

    /// Parse from ISO 639-1 code or common name
    pub fn from_code(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en" | "english" => Language::English,
            other => Language::Other(other.to_string()),
        }
    }

    /// Check if a built-in locale pack exists for this language
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Language::Other(_))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}
