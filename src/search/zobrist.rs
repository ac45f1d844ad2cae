//! Zobrist hashing for position identification
//!
//! Each (cell, color) pair gets an independent random 32-bit value;
//! a position hash is the XOR of the values for its stones plus a
//! side-to-move salt. XOR is its own inverse, so placing or removing a
//! stone is an O(1) incremental update.
//!
//! The table is built once per searcher from process-start entropy and
//! is immutable afterwards. Hashes are only compared within one search,
//! so stability across runs is not needed.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Cell, Pos, TOTAL_CELLS};

/// Zobrist hash table: random values per (position, color), plus a
/// salt XORed in when White is to move.
pub struct ZobristTable {
    black: [u32; TOTAL_CELLS],
    white: [u32; TOTAL_CELLS],
    white_to_move: u32,
}

impl ZobristTable {
    #[must_use]
    pub fn new() -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(rand::random());

        let mut black = [0u32; TOTAL_CELLS];
        let mut white = [0u32; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            black[i] = rng.random();
            white[i] = rng.random();
        }

        Self {
            black,
            white,
            white_to_move: rng.random(),
        }
    }

    /// Full hash of a board position plus side to move.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Cell) -> u32 {
        let mut h = 0u32;
        for (pos, cell) in board.occupied() {
            h ^= self.value(pos, cell);
        }
        if side_to_move == Cell::White {
            h ^= self.white_to_move;
        }
        h
    }

    /// Incremental update after placing a stone.
    ///
    /// Also toggles the side-to-move salt, since placing a stone passes
    /// the turn. Removing the same stone is the identical operation.
    #[inline]
    #[must_use]
    pub fn update_place(&self, hash: u32, pos: Pos, cell: Cell) -> u32 {
        hash ^ self.value(pos, cell) ^ self.white_to_move
    }

    #[inline]
    fn value(&self, pos: Pos, cell: Cell) -> u32 {
        match cell {
            Cell::Black => self.black[pos.to_index()],
            Cell::White => self.white[pos.to_index()],
            Cell::Empty => 0,
        }
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_move_distinguished() {
        let zt = ZobristTable::new();
        let board = Board::new();
        assert_ne!(zt.hash(&board, Cell::Black), zt.hash(&board, Cell::White));
    }

    #[test]
    fn test_different_positions_differ() {
        let zt = ZobristTable::new();
        let mut board1 = Board::new();
        let mut board2 = Board::new();
        board1.set(Pos::new(7, 7), Cell::Black);
        board2.set(Pos::new(7, 8), Cell::Black);
        assert_ne!(
            zt.hash(&board1, Cell::White),
            zt.hash(&board2, Cell::White)
        );
    }

    #[test]
    fn test_color_distinguished() {
        let zt = ZobristTable::new();
        let mut board1 = Board::new();
        let mut board2 = Board::new();
        board1.set(Pos::new(7, 7), Cell::Black);
        board2.set(Pos::new(7, 7), Cell::White);
        assert_ne!(
            zt.hash(&board1, Cell::Black),
            zt.hash(&board2, Cell::Black)
        );
    }

    #[test]
    fn test_path_independence() {
        let zt = ZobristTable::new();
        let mut board1 = Board::new();
        board1.set(Pos::new(7, 7), Cell::Black);
        board1.set(Pos::new(8, 8), Cell::White);

        let mut board2 = Board::new();
        board2.set(Pos::new(8, 8), Cell::White);
        board2.set(Pos::new(7, 7), Cell::Black);

        assert_eq!(zt.hash(&board1, Cell::Black), zt.hash(&board2, Cell::Black));
    }

    #[test]
    fn test_incremental_matches_full() {
        let zt = ZobristTable::new();
        let mut board = Board::new();

        let h0 = zt.hash(&board, Cell::Black);
        let pos = Pos::new(7, 7);
        board.set(pos, Cell::Black);
        let h1 = zt.hash(&board, Cell::White);

        assert_eq!(zt.update_place(h0, pos, Cell::Black), h1);
    }

    #[test]
    fn test_incremental_place_remove_roundtrip() {
        let zt = ZobristTable::new();
        let board = Board::new();
        let h0 = zt.hash(&board, Cell::Black);
        let pos = Pos::new(3, 11);
        let h1 = zt.update_place(h0, pos, Cell::White);
        assert_ne!(h0, h1);
        assert_eq!(zt.update_place(h1, pos, Cell::White), h0);
    }
}
