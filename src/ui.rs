#![cfg(feature = "std")]

use std::fmt::Write;

use crate::grid::{CellState, GridSnapshot};

/// Text rendering of a board: `S` for a ship cell, `X` for a hit, `.` otherwise.
/// Ship cells are only drawn when `reveal` is set.
pub fn render_board(board: &GridSnapshot, reveal: bool) -> String {
    let n = board.size.max(0) as usize;
    let mut out = String::new();
    let _ = write!(out, "    ");
    for cell in board.cells.iter().take(n) {
        let _ = write!(out, " {:>2}", cell.col_label());
    }
    out.push('\n');
    for row in board.cells.chunks(n.max(1)) {
        if let Some(first) = row.first() {
            let _ = write!(out, "{:>3} ", first.row_label());
        }
        for cell in row {
            let ch = match cell.state() {
                CellState::Hit => 'X',
                CellState::Occupied if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {:>2}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print a board to stdout.
pub fn print_board(board: &GridSnapshot, reveal: bool) {
    print!("{}", render_board(board, reveal));
}
