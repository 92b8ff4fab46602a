use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use knight_tour_core::{GameStatus, Square, SquareColor, BOARD_SIZE};
use std::io;

// Board geometry in terminal cells. Rank 8 is drawn at the top, so the board
// reads like a chess diagram.
const BOARD_LEFT: u16 = 4;
const BOARD_TOP: u16 = 2;
const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 2;

const LIGHT_BG: Color = Color::Rgb {
    r: 240,
    g: 217,
    b: 181,
};
const DARK_BG: Color = Color::Rgb {
    r: 181,
    g: 136,
    b: 99,
};

/// Map a terminal position to the board square drawn there, if any.
///
/// This is the click-to-square translation the engine leaves to the host.
pub fn square_at(column: u16, row: u16) -> Option<Square> {
    if column < BOARD_LEFT || row < BOARD_TOP {
        return None;
    }
    let file = (column - BOARD_LEFT) / CELL_WIDTH;
    let row_from_top = (row - BOARD_TOP) / CELL_HEIGHT;
    if file < BOARD_SIZE as u16 && row_from_top < BOARD_SIZE as u16 {
        let rank = BOARD_SIZE - 1 - row_from_top as u8;
        Some(Square::new(rank, file as u8))
    } else {
        None
    }
}

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    execute!(stdout, Hide, Clear(ClearType::All))?;

    if app.state.started() {
        render_board(stdout, app)?;
        render_status(stdout, app)?;
    } else {
        render_intro(stdout)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_intro(stdout: &mut io::Stdout) -> io::Result<()> {
    let lines = [
        "Knight's Tour",
        "",
        "Move the knight to visit all 64 squares exactly once.",
        "It moves in an L shape: two squares one way, one square across.",
        "Click a highlighted square to move there.",
        "",
        "  n  new game      u  undo      q  quit",
        "",
        "Press n to begin on a random square.",
    ];
    for (i, line) in lines.iter().enumerate() {
        execute!(stdout, MoveTo(2, 1 + i as u16), Print(line))?;
    }
    Ok(())
}

fn render_board(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    execute!(stdout, MoveTo(2, 0), Print("Knight's Tour"))?;

    let state = &app.state;
    for row_from_top in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - 1 - row_from_top;
        let y = BOARD_TOP + row_from_top as u16 * CELL_HEIGHT;

        // Rank label beside the first cell row
        execute!(
            stdout,
            ResetColor,
            MoveTo(1, y),
            Print((rank + 1).to_string())
        )?;

        for file in 0..BOARD_SIZE {
            let square = Square::new(rank, file);
            let x = BOARD_LEFT + file as u16 * CELL_WIDTH;

            let background = match square.color() {
                SquareColor::Light => LIGHT_BG,
                SquareColor::Dark => DARK_BG,
            };
            let (content, foreground) = if square == state.position() {
                ("N".to_string(), Color::Red)
            } else if state.is_legal(square) {
                ("o".to_string(), Color::DarkGreen)
            } else if let Some(n) = state.visit_number(square) {
                (n.to_string(), Color::Black)
            } else {
                (String::new(), Color::Black)
            };

            execute!(
                stdout,
                SetBackgroundColor(background),
                SetForegroundColor(foreground),
                MoveTo(x, y),
                Print(format!("{:^width$}", content, width = CELL_WIDTH as usize)),
                MoveTo(x, y + 1),
                Print(" ".repeat(CELL_WIDTH as usize)),
            )?;
        }
    }
    execute!(stdout, ResetColor)?;

    // File labels under the board
    let labels_y = BOARD_TOP + BOARD_SIZE as u16 * CELL_HEIGHT;
    for file in 0..BOARD_SIZE {
        let x = BOARD_LEFT + file as u16 * CELL_WIDTH + CELL_WIDTH / 2;
        execute!(
            stdout,
            MoveTo(x, labels_y),
            Print(((b'a' + file) as char).to_string())
        )?;
    }

    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let state = &app.state;
    let status_y = BOARD_TOP + BOARD_SIZE as u16 * CELL_HEIGHT + 2;

    let status = match state.status() {
        GameStatus::Solved => "Tour complete! All 64 squares visited.".to_string(),
        GameStatus::Unsolvable => format!(
            "Stuck after {} squares. Undo with u or restart with n.",
            state.history().len()
        ),
        GameStatus::InProgress => format!(
            "{} of 64 squares visited. Knight on {}.",
            state.history().len(),
            state.position()
        ),
    };

    execute!(
        stdout,
        MoveTo(2, status_y),
        Print(status),
        MoveTo(2, status_y + 1),
        Print("n new game   u undo   q quit   click a green square to move"),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_at_board_corners() {
        // Top-left terminal cell of the board is a8; bottom-right is h1.
        assert_eq!(square_at(BOARD_LEFT, BOARD_TOP), Some(Square::new(7, 0)));
        assert_eq!(
            square_at(
                BOARD_LEFT + 7 * CELL_WIDTH + CELL_WIDTH - 1,
                BOARD_TOP + 7 * CELL_HEIGHT + CELL_HEIGHT - 1
            ),
            Some(Square::new(0, 7))
        );
    }

    #[test]
    fn test_square_at_outside_board() {
        assert_eq!(square_at(0, 0), None);
        assert_eq!(square_at(BOARD_LEFT - 1, BOARD_TOP), None);
        assert_eq!(square_at(BOARD_LEFT + 8 * CELL_WIDTH, BOARD_TOP), None);
        assert_eq!(square_at(BOARD_LEFT, BOARD_TOP + 8 * CELL_HEIGHT), None);
    }

    #[test]
    fn test_every_square_is_clickable() {
        for square in Square::all() {
            let x = BOARD_LEFT + square.file() as u16 * CELL_WIDTH;
            let y = BOARD_TOP + (7 - square.rank()) as u16 * CELL_HEIGHT;
            assert_eq!(square_at(x, y), Some(square));
        }
    }
}
