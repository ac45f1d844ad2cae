//! Omok (five-in-a-row) rule engine and search.
//!
//! A 15x15 board engine with full rule support: win detection over all
//! four axes, the double-open-three forbidden rule, and an AI opponent
//! built from a layered move selector on top of a time-bounded
//! alpha-beta search with a Zobrist-hashed transposition table.
//!
//! The crate has no UI and no notion of a match: callers own turn
//! order, move history, and rendering. [`game`] is the gateway for real
//! placements; [`Engine`] picks moves for one side.
//!
//! ```
//! use omok::{game, Board, Cell, Difficulty, Engine, Pos};
//!
//! let mut board = Board::new();
//! game::place(&mut board, Pos::new(7, 7), Cell::Black).unwrap();
//!
//! let mut engine = Engine::new(Cell::White, Difficulty::Beginner);
//! let reply = engine.choose_move(&board).unwrap();
//! game::place(&mut board, reply, Cell::White).unwrap();
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{Board, Cell, Pos, BOARD_SIZE, WIN_LENGTH};
pub use engine::{Decision, DecisionKind, Difficulty, Engine};
pub use game::{is_forbidden, place, undo, PlaceError};
pub use rules::GameResult;
