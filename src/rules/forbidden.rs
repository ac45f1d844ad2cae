//! Double-open-three forbidden move rule
//!
//! A move that simultaneously creates two or more open threes on
//! different axes is illegal for either color. The check probes the
//! placement on a board copy, so the real board is never mutated.

use crate::board::{Board, Cell, Pos};

use super::line::{scan_line, AXES};

/// Would placing `color` at `pos` create two or more open threes?
///
/// An open three is a run of exactly three with both ends open
/// (`count == 3 && open == 2`). Only the hypothetical new stone's
/// resulting pattern is evaluated, never existing stones retroactively.
pub fn creates_double_open_three(board: &Board, pos: Pos, color: Cell) -> bool {
    let mut probe = *board;
    probe.set(pos, color);

    let mut open_threes = 0;
    for &(dr, dc) in &AXES {
        let run = scan_line(&probe, pos, dr, dc, color);
        if run.count == 3 && run.open == 2 {
            open_threes += 1;
        }
    }
    open_threes >= 2
}
