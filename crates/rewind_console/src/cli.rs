//! Command-line interface for the rewind console.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travelling move list
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print every view as JSON instead of a drawn board
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind"]);
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["rewind", "--config", "rewind.toml", "--json"]);
        assert_eq!(cli.config, Some(PathBuf::from("rewind.toml")));
        assert!(cli.json);
    }
}
