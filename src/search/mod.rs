//! Search: Zobrist hashing, transposition table, candidate generation,
//! time-bounded alpha-beta

pub mod alphabeta;
pub mod candidates;
pub mod tt;
pub mod zobrist;

// Re-exports
pub use alphabeta::{SearchOutcome, Searcher};
pub use candidates::{candidates, ranked_candidates};
pub use tt::{TranspositionTable, TtEntry};
pub use zobrist::ZobristTable;
