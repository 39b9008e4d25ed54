//! Checkable properties of a move history.
//!
//! Invariants are logical properties that must hold after every intent the
//! history engine accepts. The engine debug-asserts them; tests check them
//! directly against hand-corrupted logs.

pub mod alternating_turn;
pub mod genesis;
pub mod monotonic_history;
pub mod step_in_range;

pub use alternating_turn::AlternatingTurnInvariant;
pub use genesis::GenesisInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violated invariant, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    GenesisInvariant,
    StepInRangeInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryLog, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&HistoryLog::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut log = HistoryLog::replay(&[0, 4, 8, 2]).unwrap();
        log.jump_to(1).unwrap();
        log.place_mark(Position::BottomLeft);
        assert!(HistoryInvariants::check_all(&log).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut log = HistoryLog::replay(&[4]).unwrap();
        // Flip the placed mark: breaks both the monotonic origin check and parity.
        log.snapshots_mut()[1] = crate::Snapshot::new(
            crate::Board::new().with_mark(Position::TopLeft, Mark::O),
            Some(Position::Center.coord()),
        );

        let violations = HistoryInvariants::check_all(&log).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Structural = (GenesisInvariant, StepInRangeInvariant);
        let mut log = HistoryLog::new();
        log.set_current_step(3);
        assert_eq!(Structural::check_all(&log).unwrap_err().len(), 1);
    }
}
