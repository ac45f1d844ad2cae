//! Board structure: pure cell data with positional queries

use super::bitboard::Bitboard;
use super::{Cell, Pos, BOARD_SIZE};

/// Game board: one bitboard per color.
///
/// The board is plain data. `set` never validates legality; rule
/// checks live in [`crate::rules`] and [`crate::game`]. The struct is
/// `Copy` (64 bytes), so hypothetical placements are done on a stack
/// copy and can never leak into real game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Set a cell. `Cell::Empty` clears the intersection.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Bitboard of one color (returns None for Empty)
    #[inline]
    pub fn stones(&self, cell: Cell) -> Option<&Bitboard> {
        match cell {
            Cell::Black => Some(&self.black),
            Cell::White => Some(&self.white),
            Cell::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// All empty intersections in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(r, c);
                if self.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Iterate over all occupied positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        (0..super::TOTAL_CELLS).filter_map(move |idx| {
            let pos = Pos::from_index(idx);
            match self.get(pos) {
                Cell::Empty => None,
                cell => Some((pos, cell)),
            }
        })
    }
}
