use crate::game::GameState;
use crate::rng::Prng;
use crate::square::Square;
use serde::{Deserialize, Serialize};

/// A command from the host, translated from raw input events.
///
/// The host maps clicks and key presses to commands and dispatches them
/// through [`GameState::apply`]; it never mutates the state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start over on a random square.
    NewGame,
    /// Start over on a chosen square.
    NewGameAt(Square),
    /// Move the knight to the clicked square.
    Move(Square),
    /// Take back the most recent move.
    Undo,
}

impl GameState {
    /// Dispatch a host command, returning the next state.
    ///
    /// `Move` and `Undo` are no-ops before the first `NewGame`; no command
    /// ever fails.
    pub fn apply(&self, command: Command, rng: &mut Prng) -> GameState {
        match command {
            Command::NewGame => GameState::new_game(rng),
            Command::NewGameAt(start) => GameState::new_game_at(start),
            Command::Move(target) => self.apply_move(target),
            Command::Undo => self.undo_last_move(),
        }
    }
}
