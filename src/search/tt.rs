//! Transposition table: Zobrist-keyed cache of search results
//!
//! Pure memoization: clearing the table (or a slot collision evicting
//! an entry) never changes what the search computes, only how fast.
//! A fresh table is built for every top-level search.

use crate::board::Pos;

/// Default slot count. At 16 bytes per entry this is about 1 MB,
/// plenty for one time-bounded search.
const DEFAULT_SLOTS: usize = 1 << 16;

/// Cached result for one position
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    /// Zobrist hash of the position (including side to move)
    pub hash: u32,
    /// Depth the cached value was searched to
    pub depth: i8,
    /// Cached search value
    pub value: i32,
    /// Best move found, if any
    pub best_move: Option<Pos>,
}

/// Direct-mapped transposition table.
///
/// Each hash maps to exactly one slot; stores always overwrite. A probe
/// hit is usable only when the stored entry was searched at least as
/// deep as the caller requests.
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![None; DEFAULT_SLOTS],
        }
    }

    /// Look up a position. Returns the entry only if the hash matches
    /// and its depth is at least `depth`.
    #[must_use]
    pub fn probe(&self, hash: u32, depth: i8) -> Option<TtEntry> {
        let entry = self.entries[hash as usize % self.entries.len()]?;
        if entry.hash == hash && entry.depth >= depth {
            Some(entry)
        } else {
            None
        }
    }

    /// Store a result, unconditionally overwriting the slot.
    pub fn store(&mut self, hash: u32, depth: i8, value: i32, best_move: Option<Pos>) {
        let idx = hash as usize % self.entries.len();
        self.entries[idx] = Some(TtEntry {
            hash,
            depth,
            value,
            best_move,
        });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
