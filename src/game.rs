//! Collaborator-facing game API: place, undo, forbidden queries
//!
//! The board itself carries no legality knowledge; this module is the
//! gate every real placement goes through. Callers own move history,
//! turn order, and rendering.

use thiserror::Error;

use crate::board::{Board, Cell, Pos};
use crate::rules::{check_win, creates_double_open_three, GameResult};

/// Why a placement was rejected. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },
    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("placing at ({row}, {col}) would form a double open three")]
    Forbidden { row: u8, col: u8 },
}

/// Place a stone for `color` and report the game state.
///
/// Rejects out-of-range, occupied, and double-open-three placements
/// without mutating the board. A placement that completes five in a
/// row is accepted even if it would also form a double open three:
/// winning takes precedence.
pub fn place(board: &mut Board, pos: Pos, color: Cell) -> Result<GameResult, PlaceError> {
    debug_assert_ne!(color, Cell::Empty);

    if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
        return Err(PlaceError::OutOfRange {
            row: pos.row,
            col: pos.col,
        });
    }
    if !board.is_empty(pos) {
        return Err(PlaceError::Occupied {
            row: pos.row,
            col: pos.col,
        });
    }

    let mut probe = *board;
    probe.set(pos, color);
    if let won @ GameResult::Won { .. } = check_win(&probe, pos, color) {
        *board = probe;
        return Ok(won);
    }

    if creates_double_open_three(board, pos, color) {
        return Err(PlaceError::Forbidden {
            row: pos.row,
            col: pos.col,
        });
    }

    *board = probe;
    Ok(GameResult::Ongoing)
}

/// Would `place` reject this move as a double open three?
///
/// Out-of-range and occupied cells are not forbidden, just unplayable;
/// a winning placement is never forbidden.
#[must_use]
pub fn is_forbidden(board: &Board, pos: Pos, color: Cell) -> bool {
    if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) || !board.is_empty(pos) {
        return false;
    }
    let mut probe = *board;
    probe.set(pos, color);
    if let GameResult::Won { .. } = check_win(&probe, pos, color) {
        return false;
    }
    creates_double_open_three(board, pos, color)
}

/// Remove the stone at `pos`. Move history is the caller's concern.
pub fn undo(board: &mut Board, pos: Pos) {
    board.set(pos, Cell::Empty);
}
