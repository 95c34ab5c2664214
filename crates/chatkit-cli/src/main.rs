//! Demo bot for chatkit
//!
//! Registers a small command set, writes the command documentation, then
//! answers commands on a stdin REPL in place of a messaging transport.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin chatkit-cli -p chatkit-cli -- <bot-token>
//! ```

use anyhow::Context;
use chatkit_core::{Bot, Command, CommandRegistry};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "chatkit-cli")]
#[command(about = "Demo chat bot built on chatkit", long_about = None)]
struct Args {
    /// Bot authentication token for the messaging platform
    token: String,
}

fn build_registry() -> chatkit_core::Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();

    registry
        .category("Utility")
        .command(
            Command::builder("Version")
                .alias("V")
                .description("Display the version.")
                .execute(|_event| async move { Ok(VERSION.to_string()) }),
        )?
        .command(
            Command::builder("Echo")
                .description("Echo the input back.")
                .argument("text")
                .execute(|event| async move { Ok(event.args.join(" ")) }),
        )?;

    registry.category("Social").command(
        Command::builder("Greet")
            .alias("Hi")
            .description("Greet someone by name.")
            .optional_argument("name")
            .execute(|event| async move {
                let name = event
                    .args
                    .first()
                    .cloned()
                    .unwrap_or_else(|| event.user_id.clone());
                Ok(format!("Hello, {name}!"))
            }),
    )?;

    Ok(registry)
}

async fn run_repl(bot: &Bot) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "chatkit demo bot. Prefix commands with '{}'; try {}help. Ctrl-D to quit.",
        bot.config().prefix,
        bot.config().prefix
    );

    loop {
        print!(">>> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match bot.handle_message("cli-user", line).await {
            Ok(Some(response)) => println!("{response}"),
            Ok(None) => println!("(not a command, ignoring)"),
            Err(e) => eprintln!("command failed: {e}"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    chatkit_utils::init_tracing();

    // Missing token is fatal before any setup runs; clap exits on its own
    let args = Args::parse();

    let registry = build_registry().context("failed to register commands")?;

    let bot = chatkit_docs::assemble(
        Bot::builder()
            .token(args.token)
            .prefix("!")
            .commands(registry),
    )
    .context("failed to assemble bot")?;

    info!(commands = bot.registry().len(), "bot ready");

    run_repl(&bot).await
}
