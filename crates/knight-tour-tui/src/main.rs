mod app;
mod render;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use knight_tour_core::Square;
use std::io::{self, Write};
use std::process::ExitCode;

/// Knight's tour puzzle: visit all 64 squares exactly once.
#[derive(Parser)]
#[command(name = "knight-tour")]
struct Args {
    /// Starting square, algebraic ("a1") or an index 0-63; random if omitted
    #[arg(long)]
    start: Option<String>,
    /// Seed for the random starting-square draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let start = match args.start.as_deref() {
        Some(text) => match parse_square(text) {
            Some(square) => Some(square),
            None => {
                eprintln!("invalid square '{}': expected a1..h8 or 0..63", text);
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    match run(start, args.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(start: Option<Square>, seed: Option<u64>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, start, seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run_app(stdout: &mut io::Stdout, start: Option<Square>, seed: Option<u64>) -> io::Result<()> {
    let mut app = App::new(start, seed);

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        match event::read()? {
            Event::Key(key) => {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }
                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }

    Ok(())
}

/// Parse a square from the command line: algebraic notation or a raw index.
fn parse_square(text: &str) -> Option<Square> {
    if let Ok(index) = text.parse::<u8>() {
        return Square::from_index(index);
    }
    let bytes = text.as_bytes();
    if bytes.len() == 2 {
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            return Some(Square::new(rank, file));
        }
    }
    None
}
