//! Win detection and immediate-threat search
//!
//! A run of five or more stones wins regardless of open ends. The
//! winning line reported is the five consecutive cells closest to the
//! probed stone, in board order from the lower-indexed end.

use crate::board::{Board, Cell, Pos, WIN_LENGTH};
use crate::search::candidates::candidates;

use super::line::AXES;

/// Outcome of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Won {
        winner: Cell,
        /// The five winning cells in board order
        line: [Pos; WIN_LENGTH],
    },
}

/// Check whether the stone at `pos` (assumed to hold `color`) completes
/// five or more in a row on any axis.
pub fn check_win(board: &Board, pos: Pos, color: Cell) -> GameResult {
    for &(dr, dc) in &AXES {
        // Collect the full run through pos in board order
        let mut cells = vec![pos];

        let mut r = i32::from(pos.row) - dr;
        let mut c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            cells.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }
        let backward = cells.len() - 1;

        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            cells.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if cells.len() >= WIN_LENGTH {
            // Lowest-starting window of five that still contains pos
            let start = backward.saturating_sub(WIN_LENGTH - 1);
            let mut line = [pos; WIN_LENGTH];
            line.copy_from_slice(&cells[start..start + WIN_LENGTH]);
            return GameResult::Won {
                winner: color,
                line,
            };
        }
    }
    GameResult::Ongoing
}

/// Find a cell where `color` wins immediately, if one exists.
///
/// Scans candidate cells in row-major order, probing each placement on
/// a board copy. Returns the first winning cell found.
pub fn find_winning_move(board: &Board, color: Cell) -> Option<Pos> {
    for pos in candidates(board) {
        let mut probe = *board;
        probe.set(pos, color);
        if let GameResult::Won { .. } = check_win(&probe, pos, color) {
            return Some(pos);
        }
    }
    None
}

/// Every cell where the opponent of `color` would win immediately.
///
/// More than one simultaneous threat is possible (e.g. an open four),
/// which is why this returns all of them rather than the first.
pub fn find_immediate_blocks(board: &Board, color: Cell) -> Vec<Pos> {
    let opp = color.opponent();
    let mut blocks = Vec::new();
    for pos in candidates(board) {
        let mut probe = *board;
        probe.set(pos, opp);
        if let GameResult::Won { .. } = check_win(&probe, pos, opp) {
            blocks.push(pos);
        }
    }
    blocks
}
