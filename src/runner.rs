//! Key dispatch: routes a key press to the command for the current screen.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::engine::{App, Screen};
use crate::input::{
    board_command, menu_command, records_command, BoardCommand, BoardCursor, MenuCommand,
    RecordsCommand,
};
use crate::types::Direction;

/// Apply `key` to `app`.
///
/// The board cursor returns to the top-left whenever a new game is dealt.
/// Quitting is left to the caller (see [`should_quit`](crate::input::should_quit)).
pub fn handle_key(app: &mut App, cursor: &mut BoardCursor, key: KeyEvent) -> Result<()> {
    match app.screen() {
        Screen::MainMenu => match menu_command(key) {
            Some(MenuCommand::Move(Direction::Up | Direction::Left)) => app.menu_prev(),
            Some(MenuCommand::Move(Direction::Down | Direction::Right)) => app.menu_next(),
            Some(MenuCommand::Activate) => {
                app.menu_activate()?;
                if app.screen() == Screen::Game {
                    cursor.reset();
                }
            }
            Some(MenuCommand::StartGame) => {
                app.start_game()?;
                cursor.reset();
            }
            Some(MenuCommand::Records) => app.open_records(),
            None => {}
        },
        Screen::Game => match board_command(key) {
            Some(BoardCommand::Move(dir)) => cursor.move_by(dir),
            Some(BoardCommand::Flip) => {
                app.click(cursor.card_id());
            }
            Some(BoardCommand::Exit) => app.exit_game(),
            None => {}
        },
        Screen::Records => {
            if let Some(RecordsCommand::Back) = records_command(key) {
                app.back_to_menu();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SymbolSet;
    use crate::engine::Config;
    use crossterm::event::KeyCode;

    fn app() -> App {
        let config = Config {
            seed: Some(1),
            ..Config::default()
        };
        App::new(config, SymbolSet::animals())
    }

    fn press(app: &mut App, cursor: &mut BoardCursor, code: KeyCode) {
        handle_key(app, cursor, KeyEvent::from(code)).unwrap();
    }

    #[test]
    fn menu_moves_wrap_both_ways() {
        let mut app = app();
        let mut cursor = BoardCursor::default();

        press(&mut app, &mut cursor, KeyCode::Up);
        assert_eq!(app.menu_index(), 1);
        press(&mut app, &mut cursor, KeyCode::Right);
        assert_eq!(app.menu_index(), 0);
    }

    #[test]
    fn starting_a_game_resets_the_cursor() {
        let mut app = app();
        let mut cursor = BoardCursor::default();
        cursor.move_by(Direction::Down);

        press(&mut app, &mut cursor, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!((cursor.col(), cursor.row()), (0, 0));
    }

    #[test]
    fn opening_records_keeps_the_cursor() {
        let mut app = app();
        let mut cursor = BoardCursor::default();
        cursor.move_by(Direction::Right);

        press(&mut app, &mut cursor, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Records);
        assert_eq!(cursor.col(), 1);

        press(&mut app, &mut cursor, KeyCode::Backspace);
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn board_keys_flip_and_exit() {
        let mut app = app();
        let mut cursor = BoardCursor::default();
        press(&mut app, &mut cursor, KeyCode::Char('1'));

        press(&mut app, &mut cursor, KeyCode::Char('d'));
        press(&mut app, &mut cursor, KeyCode::Char(' '));
        assert_eq!(app.game().unwrap().selection(), &[cursor.card_id()]);

        press(&mut app, &mut cursor, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(app.game().is_none());
    }
}
