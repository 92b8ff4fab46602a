//! Core engine for a single-player knight's tour puzzle on an 8x8 board.
//!
//! The player repeatedly moves a knight to an unvisited square reachable by a
//! legal knight move, trying to visit all 64 squares exactly once. This crate
//! holds the rules only: board modeling, legal-move computation, move
//! application, win/loss detection, and undo. Rendering and input translation
//! belong to the host program, which feeds [`Command`] values in and reads the
//! resulting [`GameState`] back out.
//!
//! # Overview
//!
//! - [`square`]: the [`Square`] value type (row-major index 0-63) and its
//!   rank/file and color conversions
//! - [`moves`]: knight-offset enumeration and the legal-move calculator
//! - [`game`]: the [`GameState`] aggregate, its operations, and [`GameStatus`]
//! - [`command`]: the [`Command`] surface hosts dispatch through
//! - [`rng`]: the seedable [`Prng`] used to draw random starting squares
//!
//! # Examples
//!
//! ```
//! use knight_tour_core::{GameState, GameStatus, Square};
//!
//! // Start in the a1 corner.
//! let state = GameState::new_game_at(Square::new(0, 0));
//! assert_eq!(state.legal_moves().len(), 2);
//!
//! // Clicking a highlighted square applies the move ...
//! let next = state.apply_move(Square::new(2, 1));
//! assert_eq!(next.history().len(), 2);
//! assert_eq!(next.status(), GameStatus::InProgress);
//!
//! // ... and undo restores the previous state exactly.
//! assert_eq!(next.undo_last_move(), state);
//! ```

pub mod command;
pub mod game;
pub mod moves;
pub mod rng;
pub mod square;

// Re-export commonly used types
pub use self::{
    command::Command,
    game::{GameState, GameStatus},
    moves::{knight_targets, legal_moves, KNIGHT_OFFSETS},
    rng::Prng,
    square::{Square, SquareColor, BOARD_SIZE, SQUARE_COUNT},
};
