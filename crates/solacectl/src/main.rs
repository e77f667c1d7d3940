//! Solace Control - CLI front end for the Solace support chatbot.
//!
//! Provides an interactive chat, a one-shot message command, and a
//! viewer for the conversation log.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "solacectl")]
#[command(about = "Solace - supportive, non-clinical emotional assistance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive support chat
    Chat,

    /// Send a single message and print the response
    Say {
        /// Message text
        text: String,

        /// Print the structured response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent turns from the conversation log
    Log {
        /// Number of turns to show
        #[arg(long, default_value_t = 10)]
        last: usize,
    },
}

fn main() -> Result<()> {
    // Chat output goes to stdout; keep tracing quiet unless warned.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => commands::handle_chat(),
        Commands::Say { text, json } => commands::handle_say(&text, json),
        Commands::Log { last } => commands::handle_log(last),
    }
}
