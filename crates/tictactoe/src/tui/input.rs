//! Keyboard and mouse input mapped to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::Position;

use super::ui::ScreenLayout;
use crate::theme::Theme;

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Put a mark on a cell.
    Place(Position),
    /// Clear the board.
    Reset,
    /// Two humans at one keyboard.
    TwoPlayer,
    /// Flip AI mode.
    ToggleAi,
    /// Switch to a specific theme.
    SelectTheme(Theme),
    /// Switch to the next theme.
    CycleTheme,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command. Key releases are ignored.
pub fn key_command(key: KeyEvent, cursor: Position) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Cursor(move_cursor(cursor, key.code)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Place(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1).map(Command::Place)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::TwoPlayer),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::ToggleAi),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::CycleTheme),
        KeyCode::F(n) => Theme::from_shortcut(n).map(Command::SelectTheme),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Maps a left click on a cell to a `Place` command.
pub fn mouse_command(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.cell_at(mouse.column, mouse.row).map(Command::Place)
        }
        _ => None,
    }
}
