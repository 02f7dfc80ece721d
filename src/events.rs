//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    app::MAX_NAME_LENGTH,
    movement::Direction,
    types::{GameOverItem, MainMenuItem, MenuItem as _, Screen},
    App,
};

/// Interval between two input polls.
///
/// The game clock is advanced once per poll, so this also bounds how late the timer label can
/// lag behind the wall clock.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI and advances the game clock after every poll.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    app.tick();

    Ok(())
}

/// Dispatches a single key press to the handler of the current screen.
///
/// `q` quits from every screen except the name entry, where it is part of the typed name.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::NameEntry => handle_name_entry(app, code),
        _ if code == KeyCode::Char('q') => app.exit = true,
        Screen::MainMenu(item) => handle_main_menu(app, item, code),
        Screen::Tutorial | Screen::HighScores => {
            if is_back(code) || is_select(code) {
                app.screen = Screen::MainMenu(MainMenuItem::PlayGame);
            }
        }
        Screen::InGame => handle_in_game(app, code),
        Screen::GameOver(item) => handle_game_over(app, item, code),
    }
}

/// Whether the key moves a menu cursor down.
const fn is_down(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('j') | KeyCode::Down)
}

/// Whether the key moves a menu cursor up.
const fn is_up(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('k') | KeyCode::Up)
}

/// Whether the key confirms the highlighted menu item.
const fn is_select(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('l') | KeyCode::Enter)
}

/// Whether the key returns to the previous screen.
const fn is_back(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('h') | KeyCode::Esc)
}

/// Maps the in-game movement keys to directions.
///
/// Both the W, A, S and D keys and the arrow keys are accepted.
const fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Handles key presses on the main menu.
fn handle_main_menu(app: &mut App, item: MainMenuItem, code: KeyCode) {
    if is_down(code) {
        app.screen = Screen::MainMenu(item.next());
    } else if is_up(code) {
        app.screen = Screen::MainMenu(item.previous());
    } else if is_select(code) {
        app.status = None;
        match item {
            MainMenuItem::PlayGame => app.start_game(),
            MainMenuItem::Tutorial => app.screen = Screen::Tutorial,
            MainMenuItem::HighScores => app.open_high_scores(),
            MainMenuItem::Quit => app.exit = true,
        }
    }
}

/// Handles key presses while a maze is being played.
///
/// A move that reaches an end tile moves on to the name entry screen before any further key is
/// processed.
fn handle_in_game(app: &mut App, code: KeyCode) {
    if code == KeyCode::Esc {
        app.leave_game();
        return;
    }

    let Some(direction) = direction_for(code) else {
        return;
    };
    let Some(session) = app.session.as_mut() else {
        return;
    };

    if session.step(direction).is_some_and(|result| result.is_win()) {
        app.finish_game();
    }
}

/// Handles typing on the name entry screen.
///
/// Enter saves the typed name; Esc saves the score without a name.
fn handle_name_entry(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.save_score(),
        KeyCode::Esc => {
            app.name_input.clear();
            app.save_score();
        }
        KeyCode::Backspace => {
            let _ = app.name_input.pop();
        }
        KeyCode::Char(character)
            if character != ',' && app.name_input.chars().count() < MAX_NAME_LENGTH =>
        {
            app.name_input.push(character);
        }
        _ => {}
    }
}

/// Handles key presses on the game-over screen.
fn handle_game_over(app: &mut App, item: GameOverItem, code: KeyCode) {
    if is_down(code) {
        app.screen = Screen::GameOver(item.next());
    } else if is_up(code) {
        app.screen = Screen::GameOver(item.previous());
    } else if is_back(code) {
        app.leave_game();
    } else if is_select(code) {
        match item {
            GameOverItem::PlayAgain => app.start_game(),
            GameOverItem::MainMenu => app.leave_game(),
        }
    }
}
