use crate::moves::legal_moves;
use crate::rng::Prng;
use crate::square::{Square, SQUARE_COUNT};
use serde::{Deserialize, Serialize};

/// Terminal status of the puzzle, derived from the state on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal move remains.
    InProgress,
    /// All 64 squares visited exactly once.
    Solved,
    /// Unvisited squares remain but no legal move does.
    Unsolvable,
}

/// The authoritative puzzle state.
///
/// An immutable value: every operation takes `&self` and returns the next
/// state, leaving the old one untouched. Operations are total; an illegal
/// request (wrong target, undo at the start, commands before the first new
/// game) returns the state unchanged, mirroring a click on a square that is
/// not highlighted.
///
/// Invariants, once `started` is true: `history` holds no duplicates, its
/// first element equals `position`, and its length is in `1..=64`.
/// `legal_moves` is always the ascending set of unvisited knight targets
/// from `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    position: Square,
    /// Visited squares, most recent first.
    history: Vec<Square>,
    /// Squares the knight may move to next, ascending.
    legal_moves: Vec<Square>,
    started: bool,
}

impl GameState {
    /// The pre-game state shown before the first new-game command.
    ///
    /// `position`, `history`, and `legal_moves` carry no meaning until a
    /// game is started.
    pub fn unstarted() -> Self {
        Self {
            position: Square::new(0, 0),
            history: Vec::new(),
            legal_moves: Vec::new(),
            started: false,
        }
    }

    /// Start a new game on a starting square drawn uniformly from the board.
    ///
    /// Valid from any state, including `Solved` and `Unsolvable`; all prior
    /// history is discarded. Pass a seeded [`Prng`] for a deterministic draw.
    pub fn new_game(rng: &mut Prng) -> Self {
        let index = rng.next_below(SQUARE_COUNT as u64) as u8;
        Self::new_game_at(Square::new(index / 8, index % 8))
    }

    /// Start a new game on an explicit starting square.
    pub fn new_game_at(start: Square) -> Self {
        let history = vec![start];
        let legal_moves = legal_moves(start, &history);
        Self {
            position: start,
            history,
            legal_moves,
            started: true,
        }
    }

    /// Move the knight to `target`.
    ///
    /// No-op unless a game is started and `target` is in [`legal_moves`];
    /// in particular every move is a no-op once the game is `Solved` or
    /// `Unsolvable`.
    ///
    /// [`legal_moves`]: Self::legal_moves
    pub fn apply_move(&self, target: Square) -> Self {
        if !self.started || !self.legal_moves.contains(&target) {
            return self.clone();
        }

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(target);
        history.extend_from_slice(&self.history);
        let legal_moves = legal_moves(target, &history);

        Self {
            position: target,
            history,
            legal_moves,
            started: true,
        }
    }

    /// Take back the most recent move, restoring the state that existed one
    /// ply earlier.
    ///
    /// No-op unless a game is started and at least one move has been made
    /// (the starting square itself cannot be undone).
    pub fn undo_last_move(&self) -> Self {
        if !self.started || self.history.len() < 2 {
            return self.clone();
        }

        let history: Vec<Square> = self.history[1..].to_vec();
        let position = history[0];
        let legal_moves = legal_moves(position, &history);

        Self {
            position,
            history,
            legal_moves,
            started: true,
        }
    }

    /// Derive the terminal status.
    ///
    /// An unstarted game reports `InProgress`; its other fields carry no
    /// meaning yet.
    pub fn status(&self) -> GameStatus {
        if !self.started {
            GameStatus::InProgress
        } else if self.history.len() == SQUARE_COUNT {
            GameStatus::Solved
        } else if self.legal_moves.is_empty() {
            GameStatus::Unsolvable
        } else {
            GameStatus::InProgress
        }
    }

    /// The knight's current square.
    pub fn position(&self) -> Square {
        self.position
    }

    /// Visited squares, most recent first.
    pub fn history(&self) -> &[Square] {
        &self.history
    }

    /// Squares the knight may move to next, ascending.
    pub fn legal_moves(&self) -> &[Square] {
        &self.legal_moves
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether `target` would be accepted by [`apply_move`].
    ///
    /// [`apply_move`]: Self::apply_move
    pub fn is_legal(&self, target: Square) -> bool {
        self.started && self.legal_moves.contains(&target)
    }

    /// 1-based ordinal of the visit to `square`, if it has been visited.
    ///
    /// The starting square is visit 1. Hosts use this to render the tour so
    /// far.
    pub fn visit_number(&self, square: Square) -> Option<usize> {
        self.history
            .iter()
            .rev()
            .position(|&visited| visited == square)
            .map(|i| i + 1)
    }
}
