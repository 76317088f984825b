//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

use crate::{
    movement::Direction,
    types::{DifficultyMenuItem, InputEvent, MainMenuItem, Screen},
    App,
};

/// Time to wait for input before handing control back to the main loop.
///
/// This bounds how stale the on-screen timers can get between two redraws.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(FRAME_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Routes a single key press to the handler of the current screen.
///
/// The 'q' key quits from every screen. In game, movement keys become [`InputEvent`]s; on the
/// menus, the vim-style keys and their arrow equivalents navigate.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return Ok(());
    }

    if app.screen == Screen::InGame {
        return handle_game_key(app, code);
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => handle_down_events(app),
        KeyCode::Char('k') | KeyCode::Up => handle_up_events(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_select_events(app)?,
        KeyCode::Char('h') | KeyCode::Esc => handle_back_events(app),
        _ => {}
    }

    Ok(())
}

/// Translates an in-game key into a logical input event.
///
/// Arrow keys, the vim-style keys and WASD all move the player.
pub(crate) const fn game_event(code: KeyCode) -> Option<InputEvent> {
    let direction = match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 's') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h' | 'a') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'd') => Direction::Right,
        KeyCode::Char('r') => return Some(InputEvent::Restart),
        _ => return None,
    };

    Some(InputEvent::Move(direction))
}

/// Handles a key press on the in-game screen.
fn handle_game_key(app: &mut App, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Char('m') | KeyCode::Esc) {
        info!("leaving game for the main menu");
        app.leave_game();
        return Ok(());
    }

    if let Some(event) = game_event(code) {
        app.dispatch(event)?;
    }

    Ok(())
}

/// Handles downward navigation in menus.
///
/// This function processes the 'j' key press which is used for moving down in menus.
pub(crate) fn handle_down_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Play) => {
            app.screen = Screen::MainMenu(MainMenuItem::Difficulty);
        }
        Screen::MainMenu(MainMenuItem::Difficulty) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::DifficultyMenu(item) => {
            app.screen = Screen::DifficultyMenu(item.next());
        }
        _ => {}
    }
}

/// Handles upward navigation in menus.
///
/// This function processes the 'k' key press which is used for moving up in menus.
pub(crate) fn handle_up_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Difficulty);
        }
        Screen::MainMenu(MainMenuItem::Difficulty) => {
            app.screen = Screen::MainMenu(MainMenuItem::Play);
        }
        Screen::DifficultyMenu(item) => {
            app.screen = Screen::DifficultyMenu(item.previous());
        }
        _ => {}
    }
}

/// Handles selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. Picking "Play"
/// or a difficulty preset starts a game.
pub(crate) fn handle_select_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Play) => {
            app.dispatch(InputEvent::SelectDifficulty(app.difficulty))?;
        }
        Screen::MainMenu(MainMenuItem::Difficulty) => {
            app.screen = Screen::DifficultyMenu(DifficultyMenuItem::Preset(app.difficulty));
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::DifficultyMenu(DifficultyMenuItem::Preset(difficulty)) => {
            app.dispatch(InputEvent::SelectDifficulty(difficulty))?;
        }
        Screen::DifficultyMenu(DifficultyMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::Difficulty);
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles backward navigation.
///
/// This function processes the 'h' key press which is used for returning from the difficulty menu
/// to the main menu.
pub(crate) fn handle_back_events(app: &mut App) {
    if let Screen::DifficultyMenu(_) = app.screen {
        app.screen = Screen::MainMenu(MainMenuItem::Difficulty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::Config,
        session::{Difficulty, GameSession},
        visibility::Visibility,
    };

    /// Creates an app with a fixed seed.
    fn create_test_app() -> App {
        App::new(Config::default().with_seed(9))
    }

    #[test]
    fn test_quit_from_any_screen() {
        for screen in [
            Screen::MainMenu(MainMenuItem::Play),
            Screen::DifficultyMenu(DifficultyMenuItem::Back),
            Screen::InGame,
        ] {
            let mut app = create_test_app();
            app.screen = screen;

            handle_key(&mut app, KeyCode::Char('q')).expect("quitting should succeed");

            assert!(app.exit, "'q' should quit");
        }
    }

    #[test]
    fn test_main_menu_navigation() {
        let mut app = create_test_app();

        handle_key(&mut app, KeyCode::Char('j')).expect("navigation should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Difficulty));
        handle_key(&mut app, KeyCode::Down).expect("navigation should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));
        handle_key(&mut app, KeyCode::Down).expect("navigation should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));
        handle_key(&mut app, KeyCode::Char('k')).expect("navigation should succeed");
        handle_key(&mut app, KeyCode::Up).expect("navigation should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Play));
    }

    #[test]
    fn test_quit_menu_entry() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        handle_key(&mut app, KeyCode::Enter).expect("selecting should succeed");

        assert!(app.exit, "selecting quit should exit");
    }

    #[test]
    fn test_play_starts_configured_difficulty() {
        let mut app = create_test_app();

        handle_key(&mut app, KeyCode::Char('l')).expect("selecting should succeed");

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.session.as_ref().map(GameSession::side), Some(10));
    }

    #[test]
    fn test_difficulty_menu_flow() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Difficulty);

        handle_key(&mut app, KeyCode::Char('l')).expect("selecting should succeed");
        assert_eq!(
            app.screen,
            Screen::DifficultyMenu(DifficultyMenuItem::Preset(Difficulty::Hard))
        );

        handle_key(&mut app, KeyCode::Char('k')).expect("navigation should succeed");
        handle_key(&mut app, KeyCode::Char('k')).expect("navigation should succeed");
        handle_key(&mut app, KeyCode::Enter).expect("selecting should succeed");

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.difficulty, Difficulty::Easy);
        assert_eq!(app.session.as_ref().map(GameSession::side), Some(5));
    }

    #[test]
    fn test_difficulty_menu_back() {
        let mut app = create_test_app();
        app.screen = Screen::DifficultyMenu(DifficultyMenuItem::Preset(Difficulty::Medium));

        handle_key(&mut app, KeyCode::Esc).expect("going back should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Difficulty));

        app.screen = Screen::DifficultyMenu(DifficultyMenuItem::Back);
        handle_key(&mut app, KeyCode::Char('l')).expect("selecting should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Difficulty));
    }

    #[test]
    fn test_game_event_mapping() {
        for (codes, direction) in [
            ([KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')], Direction::Up),
            ([KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')], Direction::Down),
            ([KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')], Direction::Left),
            ([KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')], Direction::Right),
        ] {
            for code in codes {
                assert_eq!(game_event(code), Some(InputEvent::Move(direction)));
            }
        }
        assert_eq!(game_event(KeyCode::Char('r')), Some(InputEvent::Restart));
        assert_eq!(game_event(KeyCode::Char('x')), None);
        assert_eq!(game_event(KeyCode::Enter), None);
    }

    #[test]
    fn test_in_game_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, KeyCode::Enter).expect("selecting should succeed");

        handle_key(&mut app, KeyCode::Char('s')).expect("moving should succeed");
        let session = app.session.as_ref().expect("a game should be running");
        assert_eq!(session.visibility(), Visibility::Hidden);
        assert_eq!(session.steps(), 1);

        handle_key(&mut app, KeyCode::Char('r')).expect("restarting should succeed");
        let session = app.session.as_ref().expect("a game should be running");
        assert_eq!(session.visibility(), Visibility::Revealed);
        assert_eq!(session.steps(), 0);

        handle_key(&mut app, KeyCode::Char('m')).expect("leaving should succeed");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Play));
        assert!(app.session.is_none(), "leaving should drop the game");
    }
}
