use crate::render;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use knight_tour_core::{Command, GameState, Prng, Square};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state.
///
/// Holds the one live [`GameState`] and the random source for new games;
/// all rules live in the core, this layer only translates input events into
/// commands and re-renders from the result.
pub struct App {
    pub state: GameState,
    rng: Prng,
}

impl App {
    pub fn new(start: Option<Square>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Prng::with_seed(seed),
            None => Prng::new(),
        };
        let state = match start {
            Some(square) => GameState::new_game_at(square),
            None => GameState::unstarted(),
        };
        Self { state, rng }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('n') => self.dispatch(Command::NewGame),
            KeyCode::Char('u') => self.dispatch(Command::Undo),
            _ => {}
        }
        AppAction::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(square) = render::square_at(mouse.column, mouse.row) {
            self.dispatch(Command::Move(square));
        }
    }

    fn dispatch(&mut self, command: Command) {
        // Illegal commands come back unchanged; nothing to report.
        self.state = self.state.apply(command, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use knight_tour_core::GameStatus;

    fn key(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_new_game_key_starts_a_game() {
        let mut app = App::new(None, Some(42));
        assert!(!app.state.started());
        app.handle_key(key('n'));
        assert!(app.state.started());
        assert_eq!(app.state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_undo_key_takes_back_one_move() {
        let mut app = App::new(Some(Square::new(0, 0)), Some(42));
        let target = app.state.legal_moves()[0];
        app.dispatch(Command::Move(target));
        assert_eq!(app.state.history().len(), 2);
        app.handle_key(key('u'));
        assert_eq!(app.state.history().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(None, Some(42));
        assert!(matches!(app.handle_key(key('q')), AppAction::Quit));
    }
}
