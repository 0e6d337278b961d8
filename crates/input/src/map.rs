//! Key mapping from terminal events to screen commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands available on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Move(Direction),
    Activate,
    StartGame,
    Records,
}

/// Commands available on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    Move(Direction),
    Flip,
    Exit,
}

/// Commands available on the records screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsCommand {
    Back,
}

fn direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// Map keyboard input on the main menu.
pub fn menu_command(key: KeyEvent) -> Option<MenuCommand> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuCommand::Activate),
        KeyCode::Char('1') => Some(MenuCommand::StartGame),
        KeyCode::Char('2') => Some(MenuCommand::Records),
        code => direction_key(code).map(MenuCommand::Move),
    }
}

/// Map keyboard input on the game board.
pub fn board_command(key: KeyEvent) -> Option<BoardCommand> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(BoardCommand::Flip),
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(BoardCommand::Exit),
        code => direction_key(code).map(BoardCommand::Move),
    }
}

/// Map keyboard input on the records screen.
pub fn records_command(key: KeyEvent) -> Option<RecordsCommand> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char(' ') => {
            Some(RecordsCommand::Back)
        }
        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
