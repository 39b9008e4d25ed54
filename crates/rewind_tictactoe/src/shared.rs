//! Thread-safe handle to a single game.

use super::error::HistoryError;
use super::history::{HistoryLog, Placement};
use super::position::Position;
use super::view::GameView;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument};

/// A [`HistoryLog`] behind one mutex.
///
/// Every intent takes the lock once and runs to completion, so callers on
/// different threads see intents applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    log: Arc<Mutex<HistoryLog>>,
}

impl SharedGame {
    /// Creates a handle around a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::from_log(HistoryLog::new())
    }

    /// Creates a handle around an existing log.
    pub fn from_log(log: HistoryLog) -> Self {
        Self {
            log: Arc::new(Mutex::new(log)),
        }
    }

    // Intents never leave the log half-updated, so a poisoned lock still
    // guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, HistoryLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places the next mark at `pos`.
    pub fn place_mark(&self, pos: Position) -> Placement {
        self.lock().place_mark(pos)
    }

    /// Places the next mark at a raw cell index.
    pub fn place_mark_at(&self, cell: usize) -> Result<Placement, HistoryError> {
        self.lock().place_mark_at(cell)
    }

    /// Jumps to a recorded step.
    pub fn jump_to(&self, step: usize) -> Result<(), HistoryError> {
        self.lock().jump_to(step)
    }

    /// Flips the move-list order.
    pub fn toggle_order(&self) {
        self.lock().toggle_order();
    }

    /// Projects the current state.
    pub fn view(&self) -> GameView {
        self.lock().project()
    }

    /// Copies out the whole log.
    pub fn snapshot(&self) -> HistoryLog {
        self.lock().clone()
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&self) {
        *self.lock() = HistoryLog::new();
        info!("Started new game");
    }
}
