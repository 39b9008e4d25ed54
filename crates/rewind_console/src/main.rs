//! Rewind - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_console::{Cli, Command, Console, ConsoleConfig, Flow};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref())
        .context("Failed to load console config")?
        .with_json(cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(json = *config.json(), "Starting rewind console");
    run(Console::new(config))
}

/// Reads commands from stdin until `quit` or end of input.
fn run(mut console: Console) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}", console.show()?)?;
    writeln!(stdout, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let text = match line.parse::<Command>() {
            Ok(command) => match console.handle(command)? {
                Flow::Continue(text) => text,
                Flow::Quit => break,
            },
            Err(e) => {
                debug!(input = %line, error = %e, "Unparsed input");
                format!("error: {}", e)
            }
        };
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
    }

    info!("Console closed");
    Ok(())
}
