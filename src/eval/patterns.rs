//! Pattern scores for position evaluation
//!
//! Scores a contiguous run by its length and how many of its ends are
//! open. Tuned as a steep hierarchy: a five dwarfs an open four, which
//! dwarfs everything below it.

/// Five or more in a row: a win
pub const FIVE: i32 = 1_000_000;
/// Open four: two ways to complete, unstoppable
pub const OPEN_FOUR: i32 = 150_000;
/// Closed four: one way to complete
pub const CLOSED_FOUR: i32 = 12_000;
/// Open three: becomes an open four if unblocked
pub const OPEN_THREE: i32 = 7_000;
/// Closed three
pub const CLOSED_THREE: i32 = 600;
/// Open two
pub const OPEN_TWO: i32 = 250;
/// Closed two
pub const CLOSED_TWO: i32 = 60;
/// Anything shorter or fully blocked
pub const RESIDUAL: i32 = 5;

/// Search values above this are treated as a near-certain win
pub const NEAR_WIN: i32 = 900_000;

/// Score a run of `count` stones with `open` open ends.
pub fn pattern_score(count: u32, open: u8) -> i32 {
    match (count, open) {
        (5.., _) => FIVE,
        (4, 2) => OPEN_FOUR,
        (4, 1) => CLOSED_FOUR,
        (3, 2) => OPEN_THREE,
        (3, 1) => CLOSED_THREE,
        (2, 2) => OPEN_TWO,
        (2, 1) => CLOSED_TWO,
        _ => RESIDUAL,
    }
}
