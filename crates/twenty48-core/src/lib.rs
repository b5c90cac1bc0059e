//! twenty48-core: a 4x4 sliding-tile merge puzzle board.
//!
//! This crate provides:
//! - A `Board` type holding the 4x4 grid of tile exponents (`0` = empty,
//!   otherwise the tile shows `2^e`) with ergonomic methods
//!   (`apply_move`, `spawn_tile`, `step`, `get`, ...)
//! - A direction-agnostic line resolver implementing the canonical
//!   slide-then-merge-then-slide move semantics
//!
//! Quick start:
//! ```
//! use twenty48_core::{Board, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut board = Board::new_game(&mut rng);
//! assert_eq!(board.count_empty(), 14);
//!
//! // One discrete move; a tile spawns only if the grid changed
//! let _ = board.step(Move::Right, &mut rng);
//! ```
//!
//! The resolver never caps exponents: merges past any display palette are
//! the presentation layer's problem, not the board's.

pub mod engine;

pub use engine::{Board, Move, ParseMoveError, TilesIter};
