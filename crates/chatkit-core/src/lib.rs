//! Core abstractions for chatkit
//!
//! chatkit is a framework for building chat-bot applications on top of a
//! third-party real-time messaging API. This crate holds the pieces every bot
//! uses:
//!
//! - **Command model**: [`Command`] is a plain data record (names, category,
//!   argument schema, description) plus an async [`CommandHandler`]
//! - **Registry**: [`CommandRegistry`] keeps commands in registration order
//!   and enforces per-category name uniqueness
//! - **Declarative DSL**: builder-style registration via [`Command::builder`]
//!   and [`CommandRegistry::category`]
//! - **Dispatch**: prefix stripping, case-insensitive lookup, localized
//!   unknown-command replies with a nearest-name recommendation
//! - **Bot assembly**: [`Bot`] wires config, locale, and registry together
//!   and exposes [`Bot::handle_message`] for the transport layer to call
//!
//! Networking, event delivery, and rate limiting belong to the underlying
//! messaging library, not to this crate.
//!
//! # Example
//!
//! ```
//! use chatkit_core::{Bot, Command, CommandRegistry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> chatkit_core::Result<()> {
//! let mut registry = CommandRegistry::new();
//! registry
//!     .category("Utility")
//!     .command(
//!         Command::builder("Ping")
//!             .description("Respond with pong.")
//!             .execute(|_event| async move { Ok("pong".to_string()) }),
//!     )?;
//!
//! let bot = Bot::builder()
//!     .token("bot-token")
//!     .commands(registry)
//!     .build()?;
//!
//! let reply = bot.handle_message("user-1", "!ping").await?;
//! assert_eq!(reply.as_deref(), Some("pong"));
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;

// Re-export main types for convenience
pub use bot::{Bot, BotBuilder};
pub use command::{Command, CommandArgument, CommandBuilder, CommandEvent, CommandHandler, handler_fn};
pub use config::{BotConfig, BotConfigBuilder};
pub use dispatch::{Dispatch, Dispatcher};
pub use error::{CoreError, Result};
pub use registry::{CategoryScope, CommandRegistry};

// Re-export locale types so applications rarely need chatkit-locale directly
pub use chatkit_locale::{Language, Locale};
