//! Position evaluation: pattern scores and heuristics

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{evaluate_board, evaluate_move, MOVE_SCALE};
pub use patterns::{pattern_score, FIVE, NEAR_WIN};
