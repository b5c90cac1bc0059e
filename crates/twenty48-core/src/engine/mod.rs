//! Engine module: 4x4 exponent grid, slide/merge line resolver, and
//! random tile spawning. Public API stays small and ergonomic.
//!
//! - `Board` is the 4x4 state with useful methods.
//! - The line resolver and per-direction coordinate mapping live in `ops`
//!   to keep the hot path tidy.

mod ops;
pub mod state;

pub use state::{Board, Move, ParseMoveError, TilesIter};
