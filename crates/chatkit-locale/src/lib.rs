//! Localized built-in strings for chatkit
//!
//! Every user-facing string the framework emits on its own behalf lives in a
//! [`Locale`] pack. A pack is a plain struct with one field per string key, so
//! applications can override individual strings or ship a whole translated
//! pack. Templates use positional placeholders (`{0}`, `{1}`, ...) filled by
//! [`inject`].
//!
//! # Quick Start
//!
//! ```
//! use chatkit_locale::{inject, Language, Locale};
//!
//! let locale = Locale::for_language(&Language::English);
//! assert_eq!(locale.unknown_command, "Unknown Command");
//!
//! let message = inject(&locale.invalid_boolean_arg, &["yes", "no"]);
//! assert_eq!(message, "Must be 'yes' or 'no'");
//! ```

mod error;
mod inject;
mod language;
mod locale;

pub use error::{LocaleError, Result};
pub use inject::{inject, try_inject};
pub use language::Language;
pub use locale::Locale;
