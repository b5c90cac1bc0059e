use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ops;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// Error returned when a direction token cannot be parsed.
///
/// The `Move` enum itself makes undefined directions unrepresentable;
/// this error exists at the text boundary (user input, config files).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move direction {0:?} (expected up/down/left/right)")]
pub struct ParseMoveError(String);

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse a direction token. Accepts full names plus wasd/hjkl aliases.
    ///
    /// ```
    /// use twenty48_core::Move;
    /// assert_eq!("right".parse::<Move>().unwrap(), Move::Right);
    /// assert_eq!("W".parse::<Move>().unwrap(), Move::Up);
    /// assert!("diagonal".parse::<Move>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Ok(Move::Up),
            "down" | "s" | "j" => Ok(Move::Down),
            "left" | "a" | "h" => Ok(Move::Left),
            "right" | "d" | "l" => Ok(Move::Right),
            other => Err(ParseMoveError(other.to_string())),
        }
    }
}

/// 4x4 board of tile exponents, row-major, origin top-left.
///
/// A cell holds the exponent `e`: `0` means empty, otherwise the tile
/// displays `2^e`. Exponents are not capped at the display palette's
/// range; a long game can merge past it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pub(crate) cells: [u8; 16],
}

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board { cells: [0; 16] };

    /// Create a zero-filled board.
    #[inline]
    pub fn new() -> Self {
        Board::EMPTY
    }

    /// Create a board seeded with exactly two spawned tiles, the state a
    /// session starts from before the first render.
    ///
    /// ```
    /// use twenty48_core::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let board = Board::new_game(&mut rng);
    /// assert_eq!(board.count_empty(), 14);
    /// ```
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Board::EMPTY;
        board.spawn_tile(rng);
        board.spawn_tile(rng);
        board
    }

    /// Read the exponent at `(row, col)`, both in `0..4`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < 4 && col < 4, "cell index out of range: ({row}, {col})");
        self.cells[row * 4 + col]
    }

    /// Write the exponent at `(row, col)`. Intended for hosts and tests
    /// that need to stage a specific position.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, exponent: u8) {
        assert!(row < 4 && col < 4, "cell index out of range: ({row}, {col})");
        self.cells[row * 4 + col] = exponent;
    }

    /// Slide and merge all four lines in `direction`, in place.
    ///
    /// Returns whether the grid changed, compared cell-by-cell against
    /// the pre-move state. A move that cannot slide anything is a no-op
    /// and reports `false`; it never blocks or errors.
    ///
    /// ```
    /// use twenty48_core::{Board, Move};
    /// let mut board = Board::new();
    /// board.set(0, 2, 1);
    /// board.set(0, 3, 1);
    /// assert!(board.apply_move(Move::Right));
    /// assert_eq!(board.get(0, 3), 2);
    /// assert!(!board.apply_move(Move::Right));
    /// ```
    #[inline]
    pub fn apply_move(&mut self, direction: Move) -> bool {
        ops::apply_move(&mut self.cells, direction)
    }

    /// Place a new tile in a uniformly random empty cell: exponent 1
    /// (tile 2) or 2 (tile 4), each with probability 0.5.
    ///
    /// A full board is a silent no-op, not an error.
    ///
    /// ```
    /// use twenty48_core::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut board = Board::new();
    /// board.spawn_tile(&mut rng);
    /// assert_eq!(board.count_empty(), 15);
    /// ```
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        self.cells[row * 4 + col] = if rng.gen_bool(0.5) { 1 } else { 2 };
    }

    /// Apply one discrete move request: slide/merge in `direction`, and
    /// spawn a tile if and only if the grid changed.
    ///
    /// Returns whether the grid changed. This is the coupling contract a
    /// host must honor; calling it instead of `apply_move` + `spawn_tile`
    /// makes free tiles impossible.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Move, rng: &mut R) -> bool {
        let changed = self.apply_move(direction);
        if changed {
            self.spawn_tile(rng);
        }
        changed
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&exp| exp == 0).count()
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..16)
            .filter(|&idx| self.cells[idx] == 0)
            .map(|idx| (idx / 4, idx % 4))
            .collect()
    }

    /// Iterate over tile exponents in row-major order.
    /// Returns 0 for empty, 1 for 2, 2 for 4, etc.
    #[inline]
    pub fn tiles(&self) -> TilesIter {
        TilesIter {
            cells: self.cells,
            idx: 0,
        }
    }

    /// Convenience: collect tile exponents into a `Vec<u8>`.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.tiles().collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..4 {
            if row != 0 {
                writeln!(f, "--------------------------------")?;
            }
            let cells: Vec<String> = (0..4).map(|col| format_val(self.get(row, col))).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(exp: u8) -> String {
    if exp == 0 {
        return " ".repeat(7);
    }
    // Tiles past 2^63 do not fit a u64; print the exponent form instead.
    let label = if exp < 64 {
        (1u64 << exp).to_string()
    } else {
        format!("2^{exp}")
    };
    format!("{label:^7}")
}

/// Iterator over board tiles (exponents) in row-major order.
pub struct TilesIter {
    cells: [u8; 16],
    idx: usize,
}

impl Iterator for TilesIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= 16 {
            return None;
        }
        let exp = self.cells[self.idx];
        self.idx += 1;
        Some(exp)
    }
}

impl IntoIterator for Board {
    type Item = u8;
    type IntoIter = TilesIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}

impl IntoIterator for &Board {
    type Item = u8;
    type IntoIter = TilesIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}
