//! Time-bounded alpha-beta search with iterative deepening
//!
//! Minimax alpha-beta over ranked candidates, bounded by an absolute
//! wall-clock deadline. Timeout is control flow, never an error: a node
//! that runs out of time reports its best-so-far result with a flag,
//! and the driver keeps the deepest fully completed answer.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Cell, Pos};
use crate::eval::{evaluate_board, NEAR_WIN};
use crate::rules::find_winning_move;

use super::candidates::ranked_candidates;
use super::tt::TranspositionTable;
use super::zobrist::ZobristTable;

/// Maximum candidates expanded per node
const BRANCH_LIMIT: usize = 30;

/// Base value of a forced win; biased by remaining depth so faster
/// wins score higher and slower losses score less badly.
const WIN_BASE: i32 = 1_000_000;

/// Result of one `pick_search` call
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move at the deepest completed depth, if any
    pub best_move: Option<Pos>,
    /// Value of that move
    pub value: i32,
    /// Deepest iteration that produced a move
    pub depth: i8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Result of one alpha-beta node
struct NodeResult {
    value: i32,
    best_move: Option<Pos>,
    timed_out: bool,
}

/// Alpha-beta searcher for one engine color.
///
/// Owns the immutable Zobrist table; the transposition table is rebuilt
/// for every `pick_search` call so stale shallow entries from earlier
/// turns can never pollute a deeper search.
pub struct Searcher {
    zobrist: ZobristTable,
    me: Cell,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(me: Cell) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            me,
            nodes: 0,
        }
    }

    /// Iterative-deepening search within a time budget.
    ///
    /// Deepens from 2 up to `max_depth`, keeping the best move of the
    /// deepest iteration that produced one. Stops early when an
    /// iteration times out or the value indicates a near-certain win.
    pub fn pick_search(&mut self, board: &Board, budget: Duration, max_depth: i8) -> SearchOutcome {
        let deadline = Instant::now() + budget;
        let mut tt = TranspositionTable::new();
        self.nodes = 0;

        let mut best_move = None;
        let mut best_value = 0;
        let mut best_depth = 0;

        let root_hash = self.zobrist.hash(board, self.me);
        for depth in 2..=max_depth {
            let res = self.alpha_beta(
                board,
                root_hash,
                depth,
                i32::MIN,
                i32::MAX,
                true,
                deadline,
                &mut tt,
            );
            if let Some(mv) = res.best_move {
                best_move = Some(mv);
                best_value = res.value;
                best_depth = depth;
            }
            debug!(
                "depth {depth}: value {} move {:?} nodes {} timed_out {}",
                res.value, res.best_move, self.nodes, res.timed_out
            );
            if res.timed_out || best_value > NEAR_WIN {
                break;
            }
        }

        SearchOutcome {
            best_move,
            value: best_value,
            depth: best_depth,
            nodes: self.nodes,
        }
    }

    /// One minimax node. The maximizing side plays `self.me`.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        hash: u32,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        deadline: Instant,
        tt: &mut TranspositionTable,
    ) -> NodeResult {
        if Instant::now() > deadline {
            return NodeResult {
                value: 0,
                best_move: None,
                timed_out: true,
            };
        }
        self.nodes += 1;

        if let Some(entry) = tt.probe(hash, depth) {
            return NodeResult {
                value: entry.value,
                best_move: entry.best_move,
                timed_out: false,
            };
        }

        let side = if maximizing { self.me } else { self.me.opponent() };

        // A side with an immediate win never needs to look deeper
        if let Some(win) = find_winning_move(board, side) {
            let value = if maximizing {
                WIN_BASE - (10 - i32::from(depth))
            } else {
                -WIN_BASE + (10 - i32::from(depth))
            };
            tt.store(hash, depth, value, Some(win));
            return NodeResult {
                value,
                best_move: Some(win),
                timed_out: false,
            };
        }

        if depth == 0 {
            let value = evaluate_board(board, self.me);
            tt.store(hash, depth, value, None);
            return NodeResult {
                value,
                best_move: None,
                timed_out: false,
            };
        }

        let cand = ranked_candidates(board, side, BRANCH_LIMIT);
        if cand.is_empty() {
            tt.store(hash, depth, 0, None);
            return NodeResult {
                value: 0,
                best_move: None,
                timed_out: false,
            };
        }

        let mut best_move = None;
        let mut value = if maximizing { i32::MIN } else { i32::MAX };

        for pos in cand {
            let mut child = *board;
            child.set(pos, side);
            let child_hash = self.zobrist.update_place(hash, pos, side);

            let res = self.alpha_beta(
                &child,
                child_hash,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                deadline,
                tt,
            );
            if res.timed_out {
                return NodeResult {
                    value,
                    best_move,
                    timed_out: true,
                };
            }

            if maximizing {
                if res.value > value {
                    value = res.value;
                    best_move = Some(pos);
                }
                alpha = alpha.max(value);
            } else {
                if res.value < value {
                    value = res.value;
                    best_move = Some(pos);
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        tt.store(hash, depth, value, best_move);
        NodeResult {
            value,
            best_move,
            timed_out: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> Duration {
        Duration::from_millis(900)
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut searcher = Searcher::new(Cell::Black);
        let board = Board::new();
        let outcome = searcher.pick_search(&board, budget(), 2);
        assert_eq!(outcome.best_move, Some(Pos::new(7, 7)));
        assert!(outcome.nodes > 0);
    }

    #[test]
    fn test_finds_winning_move() {
        let mut searcher = Searcher::new(Cell::White);
        let mut board = Board::new();
        for c in 4..8 {
            board.set(Pos::new(7, c), Cell::White);
        }
        board.set(Pos::new(8, 4), Cell::Black);

        let outcome = searcher.pick_search(&board, budget(), 4);
        let wins = [Pos::new(7, 3), Pos::new(7, 8)];
        assert!(wins.contains(&outcome.best_move.unwrap()));
        // Near-certain win stops the deepening early
        assert!(outcome.value > NEAR_WIN);
        assert_eq!(outcome.depth, 2);
    }

    #[test]
    fn test_blocks_opponent_four() {
        let mut searcher = Searcher::new(Cell::White);
        let mut board = Board::new();
        // Black four with one open end: (7,3) is the only block
        for c in 4..8 {
            board.set(Pos::new(7, c), Cell::Black);
        }
        board.set(Pos::new(7, 8), Cell::White);

        let outcome = searcher.pick_search(&board, budget(), 3);
        assert_eq!(outcome.best_move, Some(Pos::new(7, 3)));
    }

    #[test]
    fn test_zero_budget_times_out_gracefully() {
        let mut searcher = Searcher::new(Cell::Black);
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Cell::White);

        let outcome = searcher.pick_search(&board, Duration::ZERO, 6);
        // Deadline already passed: no move, but no panic either
        assert!(outcome.best_move.is_none());
        assert_eq!(outcome.depth, 0);
    }

    #[test]
    fn test_depth_biased_win_values_prefer_faster_wins() {
        // Value of a win found with more remaining depth is higher
        let deep = WIN_BASE - (10 - 4);
        let shallow = WIN_BASE - (10 - 2);
        assert!(deep > shallow);
    }

    #[test]
    fn test_search_is_deterministic_for_position() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Cell::Black);
        board.set(Pos::new(8, 8), Cell::White);

        let mut s1 = Searcher::new(Cell::Black);
        let mut s2 = Searcher::new(Cell::Black);
        let m1 = s1.pick_search(&board, budget(), 3).best_move;
        let m2 = s2.pick_search(&board, budget(), 3).best_move;
        assert_eq!(m1, m2);
    }
}
