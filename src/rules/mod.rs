//! Game rules: line scanning, win detection, threats, forbidden moves

pub mod forbidden;
pub mod line;
pub mod threat;
pub mod win;

// Re-exports
pub use forbidden::creates_double_open_three;
pub use line::{scan_line, LineRun, AXES};
pub use threat::find_three_threats;
pub use win::{check_win, find_immediate_blocks, find_winning_move, GameResult};
