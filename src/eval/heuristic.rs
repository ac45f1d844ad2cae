//! Heuristic scoring of positions and hypothetical moves

use crate::board::{Board, Cell, Pos, BOARD_SIZE};
use crate::rules::{scan_line, AXES};

use super::patterns::pattern_score;

/// Fixed-point scale for move-ranking scores.
///
/// Move ranking mixes fractional weights (0.9 for the opponent's reply,
/// 0.25 per unit of center distance). Scores are kept in integer math by
/// scaling everything by 20: the weights become 20/18/5. Ranking scores
/// are `i64`; search values stay unscaled `i32`.
pub const MOVE_SCALE: i64 = 20;

/// Sum of pattern scores over the four axes through `pos`,
/// which is assumed to hold `color`.
pub fn evaluate_at(board: &Board, pos: Pos, color: Cell) -> i32 {
    let mut score = 0;
    for &(dr, dc) in &AXES {
        let run = scan_line(board, pos, dr, dc, color);
        score += pattern_score(run.count, run.open);
    }
    score
}

/// Score a hypothetical move at `pos` for ranking (scaled by [`MOVE_SCALE`]).
///
/// Probes the cell with `me` and then with `opp` on board copies:
/// `20*my - 18*their + 5*(15 - manhattan_from_center)`. Blocking a
/// strong opponent reply is worth nearly as much as making one.
pub fn evaluate_move(board: &Board, pos: Pos, me: Cell, opp: Cell) -> i64 {
    let mut probe = *board;
    probe.set(pos, me);
    let my = i64::from(evaluate_at(&probe, pos, me));
    probe.set(pos, opp);
    let their = i64::from(evaluate_at(&probe, pos, opp));

    let center = (BOARD_SIZE as i32 - 1) / 2;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    let center_bonus = 5 * (BOARD_SIZE as i64 - i64::from(dist));

    20 * my - 18 * their + center_bonus
}

/// Static evaluation of a whole position from `me`'s perspective.
///
/// Every occupied cell contributes its pattern score on all four axes,
/// positive for `me`'s stones and negative for the opponent's. Stones
/// of the same run each contribute, so longer runs weigh superlinearly.
pub fn evaluate_board(board: &Board, me: Cell) -> i32 {
    let mut score = 0;
    for (pos, cell) in board.occupied() {
        for &(dr, dc) in &AXES {
            let run = scan_line(board, pos, dr, dc, cell);
            let val = pattern_score(run.count, run.open);
            score += if cell == me { val } else { -val };
        }
    }
    score
}
