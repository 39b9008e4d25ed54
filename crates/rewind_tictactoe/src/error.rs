//! History engine error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a placement was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IgnoreReason {
    /// The current snapshot already has a completed line.
    #[display("game is already won")]
    GameOver,
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Specific history error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// A jump target outside the recorded history.
    #[display("step {} is outside history of length {}", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
    /// A cell index past the end of the board.
    #[display("cell index {} is outside the board (0-8)", _0)]
    CellOutOfRange(usize),
    /// A replayed move that the engine would ignore.
    #[display("move {} at cell {} rejected: {}", ply, cell, reason)]
    IllegalMove {
        /// One-based move number within the replay.
        ply: usize,
        /// Target cell index.
        cell: usize,
        /// Why the engine refused it.
        reason: IgnoreReason,
    },
    /// A stored log that breaks one or more history invariants.
    #[display("invalid history: {}", _0)]
    InvalidLog(String),
}

/// History error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// What went wrong.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error condition.
    pub fn kind(&self) -> &HistoryErrorKind {
        &self.kind
    }
}

impl From<HistoryErrorKind> for HistoryError {
    #[track_caller]
    fn from(kind: HistoryErrorKind) -> Self {
        Self::new(kind)
    }
}
