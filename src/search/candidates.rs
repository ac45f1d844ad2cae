//! Candidate move generation and ranking

use crate::board::{Board, Cell, Pos, BOARD_SIZE};
use crate::eval::{evaluate_move, MOVE_SCALE};
use crate::rules::{creates_double_open_three, find_immediate_blocks, find_three_threats};

/// Ranking bonus for a cell that blocks an opponent's immediate win.
/// Scaled like [`evaluate_move`] so the tiers stay dominant.
const WIN_BLOCK_BONUS: i64 = 1_000_000 * MOVE_SCALE;
/// Ranking bonus for a cell that blocks an open or jump three.
const THREAT_BLOCK_BONUS: i64 = 600_000 * MOVE_SCALE;

/// Candidate cells in row-major order.
///
/// The opening move is always the center. Afterwards only empties with
/// a stone within Chebyshev distance 2 are considered; if that set is
/// somehow empty, every empty cell is returned as a defensive fallback.
pub fn candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut cand = Vec::with_capacity(64);
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if board.is_empty(pos) && has_neighbor(board, pos, 2) {
                cand.push(pos);
            }
        }
    }

    if cand.is_empty() {
        board.empty_cells()
    } else {
        cand
    }
}

/// Is any stone within Chebyshev distance `dist` of `pos`?
fn has_neighbor(board: &Board, pos: Pos, dist: i32) -> bool {
    for dr in -dist..=dist {
        for dc in -dist..=dist {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if Pos::is_valid(r, c) && !board.is_empty(Pos::new(r as u8, c as u8)) {
                return true;
            }
        }
    }
    false
}

/// Candidates for `color`, forbidden moves removed, best first.
///
/// Cells that block an opponent's immediate win or triple threat are
/// boosted above everything else, then ordered by [`evaluate_move`].
/// The sort is stable, so ties keep candidate scan order. Truncated to
/// `max_width` entries.
pub fn ranked_candidates(board: &Board, color: Cell, max_width: usize) -> Vec<Pos> {
    let opp = color.opponent();
    let win_blocks = find_immediate_blocks(board, color);
    let threat_blocks = find_three_threats(board, opp);

    let mut scored: Vec<(Pos, i64)> = Vec::new();
    for pos in candidates(board) {
        if creates_double_open_three(board, pos, color) {
            continue;
        }
        let mut prio = 0i64;
        if win_blocks.contains(&pos) {
            prio += WIN_BLOCK_BONUS;
        }
        if threat_blocks.contains(&pos) {
            prio += THREAT_BLOCK_BONUS;
        }
        prio += evaluate_move(board, pos, color, opp);
        scored.push((pos, prio));
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(max_width);
    scored.into_iter().map(|(pos, _)| pos).collect()
}
