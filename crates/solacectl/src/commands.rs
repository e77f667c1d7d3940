//! Command handlers for solacectl.

use anyhow::{Context, Result};
use console::style;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use solace_core::{Response, ResponseEngine, SolaceConfig, TurnLog};

fn print_chat_header() {
    println!("{}", "Solace - supportive, non-clinical emotional assistance".bold());
    println!("This tool does not replace professional mental health care.");
    println!(
        "{}",
        "If you're feeling unsafe or in crisis, contact emergency services or a trusted \
         professional immediately."
            .dimmed()
    );
    println!("Type 'reset' to clear the conversation, 'quit' to leave.\n");
}

fn print_response(response: &Response) {
    println!("{}", response.reply);
    println!(
        "{}",
        format!("emotion: {} | sentiment: {}", response.emotion, response.sentiment).dimmed()
    );
}

/// Interactive chat loop. One engine instance for the whole session.
pub fn handle_chat() -> Result<()> {
    let config = SolaceConfig::load().context("failed to load configuration")?;
    let mut engine = ResponseEngine::with_defaults(&config);

    print_chat_header();

    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        // EOF ends the session like quit does.
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("Take care.");
                break;
            }
            "reset" => {
                engine.reset_conversation();
                println!("{}", "Conversation cleared.".dimmed());
                continue;
            }
            _ => {}
        }

        let response = engine.get_response(input);
        print_response(&response);
        println!();
    }

    Ok(())
}

/// One-shot message: print the reply, or the structured JSON record.
pub fn handle_say(text: &str, json: bool) -> Result<()> {
    let config = SolaceConfig::load().context("failed to load configuration")?;
    let mut engine = ResponseEngine::with_defaults(&config);

    let response = engine.get_response(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    Ok(())
}

/// Show the most recent turns from the conversation log.
pub fn handle_log(last: usize) -> Result<()> {
    let config = SolaceConfig::load().context("failed to load configuration")?;
    let log = TurnLog::new(&config.log_file);

    let turns = log
        .read_recent(last)
        .with_context(|| format!("failed to read log at {}", config.log_file.display()))?;

    if turns.is_empty() {
        println!("No logged conversations yet.");
        return Ok(());
    }

    for turn in &turns {
        println!(
            "{} {}",
            style(turn.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()).dim(),
            style(format!("[{} / {}]", turn.emotion, turn.sentiment)).yellow()
        );
        println!("  you: {}", turn.user);
        println!("  solace: {}\n", turn.reply);
    }

    Ok(())
}
