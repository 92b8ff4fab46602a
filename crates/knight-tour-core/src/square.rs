use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ranks (and files) on the board
pub const BOARD_SIZE: u8 = 8;

/// Total number of squares on the board
pub const SQUARE_COUNT: usize = 64;

/// Checkerboard color of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareColor {
    Light,
    Dark,
}

/// A board square, identified by its row-major index: `8 * rank + file`.
///
/// Pure value type; two squares with the same index are the same square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file coordinates.
    ///
    /// Both coordinates must be in `0..8`; callers enumerate candidates and
    /// bounds-check before constructing (that is the move calculator's job,
    /// not this type's).
    pub fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < BOARD_SIZE && file < BOARD_SIZE);
        Square(rank * BOARD_SIZE + file)
    }

    /// Checked constructor for indices coming from outside the engine.
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < SQUARE_COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    pub fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Checkerboard color: `Light` iff `rank + file` is even.
    pub fn color(self) -> SquareColor {
        if (self.rank() + self.file()) % 2 == 0 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }

    /// All 64 squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    /// Algebraic notation: `a1` is square 0, `h8` is square 63.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}
