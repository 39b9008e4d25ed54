//! Alternating turn invariant: X, O, X, O, ...

use super::super::{Cell, HistoryLog, Mark};
use super::Invariant;

/// Invariant: marks alternate starting with X.
///
/// After `k` moves the board holds `ceil(k/2)` X marks and `floor(k/2)`
/// O marks. Together with [`super::MonotonicHistoryInvariant`] this pins
/// the mark placed at odd steps to X and at even steps to O.
pub struct AlternatingTurnInvariant;

fn count(cells: &[Cell], mark: Mark) -> usize {
    cells.iter().filter(|c| **c == Cell::Marked(mark)).count()
}

impl Invariant<HistoryLog> for AlternatingTurnInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.snapshots().iter().enumerate().all(|(step, snapshot)| {
            let cells = snapshot.board().cells();
            count(cells, Mark::X) == step.div_ceil(2) && count(cells, Mark::O) == step / 2
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... by step parity"
    }
}
