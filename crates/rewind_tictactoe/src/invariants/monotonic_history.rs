//! Monotonic history invariant: each step fills exactly one empty cell.

use super::super::{Cell, HistoryLog, Position, Snapshot};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// That cell goes from empty to marked, and the later snapshot's origin is
/// its coordinate. Marks are never overwritten or cleared.
pub struct MonotonicHistoryInvariant;

fn is_single_placement(before: &Snapshot, after: &Snapshot) -> bool {
    let changed: Vec<Position> = Position::ALL
        .iter()
        .copied()
        .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
        .collect();

    match changed.as_slice() {
        [pos] => {
            before.board().get(*pos) == Cell::Empty
                && after.board().get(*pos) != Cell::Empty
                && *after.origin() == Some(pos.coord())
        }
        _ => false,
    }
}

impl Invariant<HistoryLog> for MonotonicHistoryInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.snapshots()
            .windows(2)
            .all(|pair| is_single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty cell at its origin"
    }
}
