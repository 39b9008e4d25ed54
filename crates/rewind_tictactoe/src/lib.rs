//! Tic-tac-toe with a time-travelling move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw checks over a board
//! - **History**: every snapshot since the start, a step pointer, and the
//!   move-list order flag
//! - **View**: a plain-data projection for whatever draws the game
//! - **Invariants**: properties the history keeps after every intent
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{HistoryLog, Mark, Position};
//!
//! let mut log = HistoryLog::new();
//! log.place_mark(Position::Center);
//! log.place_mark(Position::TopLeft);
//! log.jump_to(1).unwrap();
//! assert_eq!(log.project().next_mark, Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod shared;
mod types;
mod view;

pub use error::{HistoryError, HistoryErrorKind, IgnoreReason};
pub use history::{HistoryLog, Placement, Snapshot};
pub use position::{Coord, Position};
pub use rules::{Line, Win, detect_win, is_draw};
pub use shared::SharedGame;
pub use types::{Board, CELL_COUNT, Cell, Mark};
pub use view::{GameView, MoveEntry, MoveLabel, Status};
