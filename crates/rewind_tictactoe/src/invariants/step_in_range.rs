//! Step pointer invariant.

use super::super::HistoryLog;
use super::Invariant;

/// Invariant: the current step indexes a recorded snapshot.
pub struct StepInRangeInvariant;

impl Invariant<HistoryLog> for StepInRangeInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.current_step() < log.snapshots().len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}
