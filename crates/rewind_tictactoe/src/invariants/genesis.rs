//! Genesis invariant: history opens with the empty board.

use super::super::{Board, HistoryLog};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no origin.
pub struct GenesisInvariant;

impl Invariant<HistoryLog> for GenesisInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.snapshots()
            .first()
            .is_some_and(|first| *first.board() == Board::new() && first.origin().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no origin"
    }
}
