//! Read-only projection of a [`HistoryLog`] for rendering.
//!
//! A [`GameView`] is rebuilt from the log on every read and holds plain
//! data only. Renderers draw from it and forward gestures back to the log;
//! they never decide game outcomes themselves.

use super::history::HistoryLog;
use super::position::Coord;
use super::rules::{Line, Win, is_draw};
use super::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Text of a move-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveLabel {
    /// The opening, empty board.
    #[display("game start")]
    GameStart,
    /// The move that filled the given cell.
    #[display("move to {}", _0)]
    MoveTo(Coord),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// What the entry says.
    label: MoveLabel,
    /// Whether this is the step on display.
    is_current: bool,
}

/// Headline status of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Nobody won and the history is exhausted.
    #[display("It ends in a draw")]
    Draw,
    /// Play continues with this mark.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// Completed line on that board, if any.
    pub winner: Option<Win>,
    /// Draw flag (count-based, see [`is_draw`]).
    pub is_draw: bool,
    /// Mark to move from the current step.
    pub next_mark: Mark,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Cells to highlight.
    pub winning_line: Option<Line>,
    /// Whether `moves` is newest first.
    pub display_reversed: bool,
}

impl GameView {
    /// Projects the log's current state.
    pub fn from_history(log: &HistoryLog) -> Self {
        let board = *log.current().board();
        let winner = log.winner();
        let current_step = log.current_step();

        let mut moves: Vec<MoveEntry> = log
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                let label = match snapshot.origin() {
                    Some(coord) if step > 0 => MoveLabel::MoveTo(*coord),
                    _ => MoveLabel::GameStart,
                };
                MoveEntry::new(step, label, step == current_step)
            })
            .collect();
        if log.is_reversed() {
            moves.reverse();
        }

        Self {
            board,
            winner,
            is_draw: is_draw(winner.as_ref(), log.snapshots().len()),
            next_mark: log.next_mark(),
            moves,
            winning_line: winner.map(|w| w.line),
            display_reversed: log.is_reversed(),
        }
    }

    /// Headline status: a win beats a draw, a draw beats the next turn.
    pub fn status(&self) -> Status {
        match (self.winner, self.is_draw) {
            (Some(win), _) => Status::Winner(win.mark),
            (None, true) => Status::Draw,
            (None, false) => Status::NextPlayer(self.next_mark),
        }
    }

    /// True once the displayed position is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// The entry for the displayed step.
    pub fn current_entry(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| *entry.is_current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_view() {
        let view = HistoryLog::new().project();
        assert_eq!(view.board, Board::new());
        assert_eq!(view.winner, None);
        assert!(!view.is_draw);
        assert_eq!(view.next_mark, Mark::X);
        assert_eq!(view.moves, vec![MoveEntry::new(0, MoveLabel::GameStart, true)]);
        assert_eq!(view.status(), Status::NextPlayer(Mark::X));
        assert_eq!(view.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_move_labels_use_origin() {
        let view = HistoryLog::replay(&[4, 5]).unwrap().project();
        let labels: Vec<String> = view.moves.iter().map(|m| m.label().to_string()).collect();
        assert_eq!(labels, ["game start", "move to (1, 1)", "move to (1, 2)"]);
    }

    #[test]
    fn test_reversed_view_keeps_steps() {
        let mut log = HistoryLog::replay(&[0, 1, 2]).unwrap();
        log.jump_to(1).unwrap();
        log.toggle_order();

        let view = log.project();
        let steps: Vec<usize> = view.moves.iter().map(|m| *m.step()).collect();
        assert_eq!(steps, [3, 2, 1, 0]);
        assert!(view.display_reversed);
        assert_eq!(view.current_entry().map(|m| *m.step()), Some(1));
        assert_eq!(log.current_step(), 1);
    }

    #[test]
    fn test_winning_view() {
        let view = HistoryLog::replay(&[0, 1, 3, 4, 6]).unwrap().project();
        assert_eq!(view.winner, Some(Win::new(Mark::X, [0, 3, 6])));
        assert_eq!(view.winning_line, Some([0, 3, 6]));
        assert_eq!(view.status().to_string(), "Winner: X");
        assert!(view.is_over());
    }

    #[test]
    fn test_draw_needs_tenth_snapshot() {
        // X O X / X O O / O X X
        let cells = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut log = HistoryLog::replay(&cells[..8]).unwrap();
        assert!(!log.project().is_draw);

        log.place_mark(Position::BottomRight);
        let view = log.project();
        assert_eq!(log.snapshots().len(), 10);
        assert!(view.is_draw);
        assert_eq!(view.status(), Status::Draw);
        assert_eq!(view.status().to_string(), "It ends in a draw");
    }

    #[test]
    fn test_view_serializes() {
        let view = HistoryLog::replay(&[4]).unwrap().project();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["next_mark"], "O");
        assert_eq!(json["moves"][1]["label"]["MoveTo"]["row"], 1);
    }
}
