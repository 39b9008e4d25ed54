//! Console state: one game plus the settings used to show it.

use crate::command::{Command, HELP};
use crate::config::ConsoleConfig;
use crate::render::render;
use anyhow::{Context, Result};
use rewind_tictactoe::HistoryLog;
use tracing::{info, instrument, warn};

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and read the next line.
    Continue(String),
    /// Stop reading input.
    Quit,
}

/// Forwards commands into a [`HistoryLog`] and renders the result.
#[derive(Debug)]
pub struct Console {
    log: HistoryLog,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a console around a fresh game.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            log: HistoryLog::new(),
            config,
        }
    }

    /// The game being played.
    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// Renders the current view in the configured format.
    pub fn show(&self) -> Result<String> {
        let view = self.log.project();
        if *self.config.json() {
            serde_json::to_string_pretty(&view).context("Failed to serialize view")
        } else {
            Ok(render(&view, *self.config.show_indices()))
        }
    }

    /// Applies one command.
    ///
    /// Engine errors such as a jump past the end of the history are shown to
    /// the player rather than returned.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Place(cell) => {
                if let Err(e) = self.log.place_mark_at(cell) {
                    warn!(error = %e, "Placement rejected");
                    return Ok(Flow::Continue(format!("error: {}", e.kind())));
                }
            }
            Command::Jump(step) => {
                if let Err(e) = self.log.jump_to(step) {
                    warn!(error = %e, "Jump rejected");
                    return Ok(Flow::Continue(format!("error: {}", e.kind())));
                }
            }
            Command::Toggle => self.log.toggle_order(),
            Command::New => {
                self.log = HistoryLog::new();
                info!("Started new game");
            }
            Command::Show => {}
            Command::Help => return Ok(Flow::Continue(HELP.to_string())),
            Command::Quit => return Ok(Flow::Quit),
        }
        self.show().map(Flow::Continue)
    }
}
