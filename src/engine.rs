//! Engine: difficulty profiles and the tiered move selector
//!
//! The selector tries a fixed cascade of tiers, taking the first that
//! produces a legal move: immediate win, immediate block, triple-threat
//! block, time-bounded search, ranked heuristic, and finally the first
//! empty cell. Forbidden placements are skipped at every tier.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Cell, Pos};
use crate::rules::{
    creates_double_open_three, find_immediate_blocks, find_three_threats, find_winning_move,
};
use crate::eval::evaluate_move;
use crate::search::{ranked_candidates, Searcher};

/// Time and depth profile for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Wall-clock budget for one move decision
    #[must_use]
    pub fn budget(self) -> Duration {
        match self {
            Self::Beginner => Duration::from_millis(900),
            Self::Intermediate => Duration::from_millis(1500),
            Self::Advanced => Duration::from_millis(2500),
            Self::Expert => Duration::from_millis(4000),
        }
    }

    /// Iterative-deepening depth cap
    #[must_use]
    pub fn max_depth(self) -> i8 {
        match self {
            Self::Beginner => 4,
            Self::Intermediate => 5,
            Self::Advanced => 6,
            Self::Expert => 7,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// Which selector tier produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Completed five in a row immediately
    Win,
    /// Blocked an opponent's immediate win
    Block,
    /// Blocked an opponent's open or jump three
    ThreatBlock,
    /// Chosen by alpha-beta search
    Search,
    /// Best ranked candidate, search produced nothing usable
    Ranked,
    /// First empty cell, nothing else applied
    Fallback,
}

/// A chosen move plus how and how hard the engine worked for it
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub pos: Pos,
    pub kind: DecisionKind,
    /// Search value; 0 for tiers that never searched
    pub value: i32,
    pub elapsed: Duration,
    /// Nodes visited; 0 for tiers that never searched
    pub nodes: u64,
}

/// Move-choosing engine for one color at one difficulty.
pub struct Engine {
    color: Cell,
    difficulty: Difficulty,
    searcher: Searcher,
}

impl Engine {
    /// `color` must be `Black` or `White`.
    #[must_use]
    pub fn new(color: Cell, difficulty: Difficulty) -> Self {
        debug_assert_ne!(color, Cell::Empty);
        Self {
            color,
            difficulty,
            searcher: Searcher::new(color),
        }
    }

    #[must_use]
    pub fn color(&self) -> Cell {
        self.color
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pick a move for the current position.
    ///
    /// Returns `None` only when the board has no empty cell left.
    pub fn choose_move(&mut self, board: &Board) -> Option<Pos> {
        self.choose_move_with_stats(board).map(|d| d.pos)
    }

    /// Pick a move and report which tier produced it.
    pub fn choose_move_with_stats(&mut self, board: &Board) -> Option<Decision> {
        let start = Instant::now();
        let me = self.color;
        let opp = me.opponent();

        // Tier 1: win on the spot
        if let Some(pos) = find_winning_move(board, me) {
            return Some(self.decide(pos, DecisionKind::Win, 0, 0, start));
        }

        // Tier 2: block the opponent's winning cell. All blocks being
        // forbidden is a loss either way; fall through and let the
        // search pick the least bad move.
        let blocks = find_immediate_blocks(board, me);
        if let Some(&pos) = blocks
            .iter()
            .find(|&&p| !creates_double_open_three(board, p, me))
        {
            return Some(self.decide(pos, DecisionKind::Block, 0, 0, start));
        }

        // Tier 3: block an open or jump three, best block first
        let threats = find_three_threats(board, opp);
        let best_threat = threats
            .into_iter()
            .filter(|&p| !creates_double_open_three(board, p, me))
            .max_by_key(|&p| evaluate_move(board, p, me, opp));
        if let Some(pos) = best_threat {
            return Some(self.decide(pos, DecisionKind::ThreatBlock, 0, 0, start));
        }

        // Tier 4: full search
        let outcome = self
            .searcher
            .pick_search(board, self.difficulty.budget(), self.difficulty.max_depth());
        if let Some(pos) = outcome.best_move {
            if !creates_double_open_three(board, pos, me) {
                return Some(self.decide(
                    pos,
                    DecisionKind::Search,
                    outcome.value,
                    outcome.nodes,
                    start,
                ));
            }
        }

        // Tier 5: best ranked candidate
        if let Some(&pos) = ranked_candidates(board, me, 1).first() {
            return Some(self.decide(pos, DecisionKind::Ranked, 0, outcome.nodes, start));
        }

        // Tier 6: any empty cell, preferring one that is not forbidden
        let empties = board.empty_cells();
        let pos = *empties
            .iter()
            .find(|&&p| !creates_double_open_three(board, p, me))
            .or_else(|| empties.first())?;
        Some(self.decide(pos, DecisionKind::Fallback, 0, outcome.nodes, start))
    }

    fn decide(
        &self,
        pos: Pos,
        kind: DecisionKind,
        value: i32,
        nodes: u64,
        start: Instant,
    ) -> Decision {
        let elapsed = start.elapsed();
        debug!(
            "{:?} chose {:?} via {:?} in {:?} ({} nodes)",
            self.color, pos, kind, elapsed, nodes
        );
        Decision {
            pos,
            kind,
            value,
            elapsed,
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(color: Cell) -> Engine {
        Engine::new(color, Difficulty::Beginner)
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        for c in 3..7 {
            board.set(Pos::new(7, c), Cell::White);
        }
        // White also has a block available, but the win comes first
        for c in 3..6 {
            board.set(Pos::new(9, c), Cell::Black);
        }

        let d = engine(Cell::White).choose_move_with_stats(&board).unwrap();
        assert_eq!(d.kind, DecisionKind::Win);
        assert!([Pos::new(7, 2), Pos::new(7, 7)].contains(&d.pos));
    }

    #[test]
    fn test_completes_closed_four() {
        let mut board = Board::new();
        // White four with one end blocked: (4,8) is the only completion
        board.set(Pos::new(4, 3), Cell::Black);
        for c in 4..8 {
            board.set(Pos::new(4, c), Cell::White);
        }

        for difficulty in [Difficulty::Beginner, Difficulty::Expert] {
            let mut engine = Engine::new(Cell::White, difficulty);
            let d = engine.choose_move_with_stats(&board).unwrap();
            assert_eq!(d.kind, DecisionKind::Win);
            assert_eq!(d.pos, Pos::new(4, 8));
        }
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let mut board = Board::new();
        for c in 3..7 {
            board.set(Pos::new(7, c), Cell::Black);
        }
        board.set(Pos::new(0, 0), Cell::White);

        let d = engine(Cell::White).choose_move_with_stats(&board).unwrap();
        assert_eq!(d.kind, DecisionKind::Block);
        assert!([Pos::new(7, 2), Pos::new(7, 7)].contains(&d.pos));
    }

    #[test]
    fn test_blocks_open_three() {
        let mut board = Board::new();
        for c in 5..8 {
            board.set(Pos::new(7, c), Cell::Black);
        }
        board.set(Pos::new(0, 0), Cell::White);

        let d = engine(Cell::White).choose_move_with_stats(&board).unwrap();
        assert_eq!(d.kind, DecisionKind::ThreatBlock);
        assert!([Pos::new(7, 4), Pos::new(7, 8)].contains(&d.pos));
    }

    #[test]
    fn test_quiet_position_searches() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Cell::Black);

        let d = engine(Cell::White).choose_move_with_stats(&board).unwrap();
        assert_eq!(d.kind, DecisionKind::Search);
        assert!(d.nodes > 0);
    }

    #[test]
    fn test_opening_move_is_center() {
        let board = Board::new();
        let pos = engine(Cell::Black).choose_move(&board).unwrap();
        assert_eq!(pos, Pos::new(7, 7));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for r in 0..15u8 {
            for c in 0..15u8 {
                // Stripe pattern, no winner matters here
                let cell = if (r / 5 + c) % 2 == 0 {
                    Cell::Black
                } else {
                    Cell::White
                };
                board.set(Pos::new(r, c), cell);
            }
        }
        assert!(engine(Cell::White).choose_move(&board).is_none());
    }

    #[test]
    fn test_difficulty_profiles() {
        assert_eq!(Difficulty::Beginner.max_depth(), 4);
        assert_eq!(Difficulty::Expert.max_depth(), 7);
        assert!(Difficulty::Beginner.budget() < Difficulty::Expert.budget());
        assert_eq!(Difficulty::Advanced.label(), "Advanced");
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new();
        // Both sides have four in a row; White to move must win, not block
        for c in 2..6 {
            board.set(Pos::new(4, c), Cell::White);
            board.set(Pos::new(10, c), Cell::Black);
        }

        let d = engine(Cell::White).choose_move_with_stats(&board).unwrap();
        assert_eq!(d.kind, DecisionKind::Win);
        assert_eq!(d.pos.row, 4);
    }
}
