//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards and history lengths. Rules are kept apart
//! from the history engine so they can be checked on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{DRAW_THRESHOLD, is_draw, is_full};
pub use win::{LINES, Line, Win, detect_win};
