//! Text rendering of a [`GameView`].

use rewind_tictactoe::{Cell, GameView, MoveEntry, MoveLabel};
use std::fmt::Write;

const ROW_RULE: &str = "---+---+---";

fn cell_text(view: &GameView, index: usize, show_indices: bool) -> String {
    let highlighted = view
        .winning_line
        .is_some_and(|line| line.contains(&index));
    match view.board.get_index(index) {
        Some(Cell::Marked(mark)) if highlighted => format!("[{}]", mark),
        Some(Cell::Marked(mark)) => format!(" {} ", mark),
        _ if show_indices => format!(" {} ", index),
        _ => "   ".to_string(),
    }
}

fn entry_text(entry: &MoveEntry) -> String {
    match entry.label() {
        MoveLabel::GameStart => "Go to game start".to_string(),
        MoveLabel::MoveTo(coord) => format!("Go to move #{} {}", entry.step(), coord),
    }
}

/// Draws the board, the status line, the move list and the order hint.
pub fn render(view: &GameView, show_indices: bool) -> String {
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| cell_text(view, row * 3 + col, show_indices))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str(ROW_RULE);
            out.push('\n');
        }
    }

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{}", view.status());
    for entry in &view.moves {
        let marker = if *entry.is_current() { ">" } else { " " };
        let _ = writeln!(out, "{} {}", marker, entry_text(entry));
    }
    let order = if view.display_reversed {
        "ascending"
    } else {
        "descending"
    };
    let _ = write!(out, "(toggle to show {})", order);
    out
}
