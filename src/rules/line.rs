//! Line scanner: run length and open ends through a point

use crate::board::{Board, Cell, Pos};

/// The four scan axes: horizontal, vertical, diagonal SE, diagonal NE.
/// Each axis is walked in both directions, so four entries cover all eight rays.
pub const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// A contiguous same-color run through a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Total run length including the origin cell
    pub count: u32,
    /// Open ends: in-range empty cells immediately past the run (0, 1, or 2)
    pub open: u8,
}

/// Scan the run of `color` through `pos` along the `(dr, dc)` axis.
///
/// `pos` is assumed to already hold `color`. Walks forward while cells
/// match, then backward along the negated step; each end contributes
/// to `open` when the cell immediately past the run is in range and empty.
pub fn scan_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Cell) -> LineRun {
    let mut count = 1u32;
    let mut open = 0u8;

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r += dr;
        c += dc;
    }
    if Pos::is_valid(r, c) && board.is_empty(Pos::new(r as u8, c as u8)) {
        open += 1;
    }

    r = i32::from(pos.row) - dr;
    c = i32::from(pos.col) - dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r -= dr;
        c -= dc;
    }
    if Pos::is_valid(r, c) && board.is_empty(Pos::new(r as u8, c as u8)) {
        open += 1;
    }

    LineRun { count, open }
}
