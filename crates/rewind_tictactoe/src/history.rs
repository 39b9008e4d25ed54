//! Append-only move history with time travel.
//!
//! [`HistoryLog`] owns every board snapshot since the start of the game and
//! a pointer to the one currently shown. Jumping back and then playing a new
//! move discards the snapshots after the pointer, so the history is a single
//! line rather than a tree.

use super::error::{HistoryError, HistoryErrorKind, IgnoreReason};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::{Coord, Position};
use super::rules::{Win, detect_win};
use super::types::{Board, Mark};
use super::view::GameView;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One board state plus the coordinate of the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell played to reach this board; `None` for the opening snapshot.
    origin: Option<Coord>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn genesis() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Result of a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// A snapshot was appended.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Step of the new snapshot.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Placement {
    /// Returns true if the placement changed the history.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Ordered board snapshots, the current step, and the move-list order flag.
///
/// Deserialized logs are checked against [`HistoryInvariants`] and rejected
/// if any invariant fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistoryLog")]
pub struct HistoryLog {
    snapshots: Vec<Snapshot>,
    current_step: usize,
    display_reversed: bool,
}

impl HistoryLog {
    /// Starts a new game: one empty snapshot, step 0, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::genesis()],
            current_step: 0,
            display_reversed: false,
        }
    }

    /// Builds a log by placing marks on the given cell indices in order.
    ///
    /// # Errors
    ///
    /// Fails on the first index that is off the board or whose placement
    /// would be ignored.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, HistoryError> {
        let mut log = Self::new();
        for (ply, &cell) in cells.iter().enumerate() {
            if let Placement::Ignored(reason) = log.place_mark_at(cell)? {
                return Err(HistoryErrorKind::IllegalMove {
                    ply: ply + 1,
                    cell,
                    reason,
                }
                .into());
            }
        }
        Ok(log)
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.display_reversed
    }

    /// The snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current_step]
    }

    /// Mark to be placed next, derived from the current step's parity.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_at(self.current_step)
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        detect_win(&self.current().board)
    }

    /// Places the next mark at `pos`.
    ///
    /// Clicking a finished game or a filled cell does nothing: the request
    /// returns [`Placement::Ignored`] and the log is left untouched.
    /// Otherwise every snapshot after the current step is dropped before the
    /// new one is appended.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn place_mark(&mut self, pos: Position) -> Placement {
        let current = *self.current();
        if detect_win(&current.board).is_some() {
            return Placement::Ignored(IgnoreReason::GameOver);
        }
        if !current.board.is_empty(pos) {
            return Placement::Ignored(IgnoreReason::Occupied);
        }

        let mark = self.next_mark();
        let board = current.board.with_mark(pos, mark);
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(Snapshot::new(board, Some(pos.coord())));
        self.current_step = self.snapshots.len() - 1;

        debug!(%mark, position = %pos, step = self.current_step, "Mark placed");
        self.debug_check();
        Placement::Placed {
            mark,
            step: self.current_step,
        }
    }

    /// Places the next mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryErrorKind::CellOutOfRange`] for indices past 8.
    #[instrument(skip(self))]
    pub fn place_mark_at(&mut self, cell: usize) -> Result<Placement, HistoryError> {
        let pos = Position::from_index(cell).ok_or(HistoryErrorKind::CellOutOfRange(cell))?;
        Ok(self.place_mark(pos))
    }

    /// Makes `step` the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryErrorKind::StepOutOfRange`] unless
    /// `step < snapshots().len()`. The step is never clamped.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryErrorKind::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            }
            .into());
        }
        self.current_step = step;
        debug!(step, next = %self.next_mark(), "Jumped to step");
        self.debug_check();
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.display_reversed = !self.display_reversed;
        debug!(reversed = self.display_reversed, "Move order toggled");
    }

    /// Read-only projection for the rendering layer.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn project(&self) -> GameView {
        GameView::from_history(self)
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }

    #[cfg(test)]
    pub(crate) fn set_current_step(&mut self, step: usize) {
        self.current_step = step;
    }
}

/// Unchecked wire form of a [`HistoryLog`].
#[derive(Deserialize)]
struct StoredHistoryLog {
    snapshots: Vec<Snapshot>,
    current_step: usize,
    display_reversed: bool,
}

impl TryFrom<StoredHistoryLog> for HistoryLog {
    type Error = HistoryError;

    fn try_from(stored: StoredHistoryLog) -> Result<Self, Self::Error> {
        let log = Self {
            snapshots: stored.snapshots,
            current_step: stored.current_step,
            display_reversed: stored.display_reversed,
        };
        HistoryInvariants::check_all(&log).map_err(|violations| {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            HistoryError::new(HistoryErrorKind::InvalidLog(descriptions.join("; ")))
        })?;
        Ok(log)
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_log_has_single_empty_snapshot() {
        let log = HistoryLog::new();
        assert_eq!(log.snapshots().len(), 1);
        assert_eq!(log.current_step(), 0);
        assert!(!log.is_reversed());
        assert_eq!(log.current().board(), &Board::new());
        assert_eq!(log.current().origin(), &None);
        assert_eq!(log.next_mark(), Mark::X);
    }

    #[test]
    fn test_place_mark_appends_snapshot() {
        let mut log = HistoryLog::new();
        let placement = log.place_mark(Position::Center);

        assert_eq!(placement, Placement::Placed { mark: Mark::X, step: 1 });
        assert_eq!(log.current_step(), 1);
        assert_eq!(log.snapshots().len(), 2);
        assert_eq!(log.current().board().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(log.current().origin(), &Some(Coord::new(1, 1)));
        assert_eq!(log.next_mark(), Mark::O);
    }

    #[test]
    fn test_place_on_occupied_cell_is_ignored() {
        let mut log = HistoryLog::new();
        log.place_mark(Position::Center);
        let before = log.clone();

        assert_eq!(
            log.place_mark(Position::Center),
            Placement::Ignored(IgnoreReason::Occupied)
        );
        assert_eq!(log, before);
    }

    #[test]
    fn test_place_after_win_is_ignored() {
        let mut log = HistoryLog::replay(&[0, 1, 3, 4, 6]).unwrap();
        let before = log.clone();

        assert_eq!(
            log.place_mark(Position::TopRight),
            Placement::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(log, before);
    }

    #[test]
    fn test_place_mark_at_rejects_off_board_index() {
        let mut log = HistoryLog::new();
        let err = log.place_mark_at(9).unwrap_err();
        assert_eq!(err.kind(), &HistoryErrorKind::CellOutOfRange(9));
        assert_eq!(log, HistoryLog::new());
    }

    #[test]
    fn test_jump_to_moves_pointer_only() {
        let mut log = HistoryLog::replay(&[4, 0, 8]).unwrap();
        log.jump_to(1).unwrap();

        assert_eq!(log.current_step(), 1);
        assert_eq!(log.snapshots().len(), 4);
        assert_eq!(log.next_mark(), Mark::O);
    }

    #[test]
    fn test_jump_to_out_of_range_fails_without_clamping() {
        let mut log = HistoryLog::replay(&[4, 0]).unwrap();
        let err = log.jump_to(3).unwrap_err();

        assert_eq!(err.kind(), &HistoryErrorKind::StepOutOfRange { step: 3, len: 3 });
        assert_eq!(log.current_step(), 2);
    }

    #[test]
    fn test_branching_discards_future() {
        let mut log = HistoryLog::replay(&[0, 1, 2, 3]).unwrap();
        assert_eq!(log.snapshots().len(), 5);

        log.jump_to(2).unwrap();
        let placement = log.place_mark(Position::BottomRight);

        assert_eq!(placement, Placement::Placed { mark: Mark::X, step: 3 });
        assert_eq!(log.snapshots().len(), 4);
        assert_eq!(log.current_step(), 3);
        assert!(log.current().board().is_empty(Position::TopRight));
        assert_eq!(log.current().origin(), &Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_jump_back_before_win_reopens_play() {
        let mut log = HistoryLog::replay(&[0, 1, 3, 4, 6]).unwrap();
        log.jump_to(4).unwrap();

        assert!(log.winner().is_none());
        assert!(log.place_mark(Position::BottomRight).is_placed());
        assert_eq!(log.snapshots().len(), 6);
    }

    #[test]
    fn test_toggle_order_leaves_history_alone() {
        let mut log = HistoryLog::replay(&[4, 0]).unwrap();
        let before = log.snapshots().to_vec();

        log.toggle_order();
        assert!(log.is_reversed());
        log.toggle_order();
        assert!(!log.is_reversed());

        assert_eq!(log.snapshots(), before.as_slice());
        assert_eq!(log.current_step(), 2);
    }

    #[test]
    fn test_replay_reports_illegal_move() {
        let err = HistoryLog::replay(&[4, 4]).unwrap_err();
        assert_eq!(
            err.kind(),
            &HistoryErrorKind::IllegalMove {
                ply: 2,
                cell: 4,
                reason: IgnoreReason::Occupied,
            }
        );
    }
}
