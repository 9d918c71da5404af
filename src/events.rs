//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode};
use tracing::info;

use crate::{
    grid::Direction,
    search::SearchMode,
    types::{MainMenuItem, Reveal, Screen},
    App,
};

/// Longest time spent waiting for input before the replay gets a chance to advance.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout no longer than the replay tick to avoid
/// blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.settings.tick.min(POLL_TIMEOUT))? {
        if let Event::Key(key) = event::read()? {
            handle_key_events(app, key.code)?;
        }
    }

    // Update replay if in-game
    if let (Screen::InGame | Screen::Solved, Some(game)) = (&app.screen, app.game.as_mut()) {
        game.replay.update();
    }

    Ok(())
}

/// Dispatches a single key press to its handler.
pub(crate) fn handle_key_events(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') | KeyCode::Esc => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app)?,
        KeyCode::Char('a') => handle_reveal_events(app, Reveal::Answer)?,
        KeyCode::Char('b') => handle_reveal_events(app, Reveal::Search(SearchMode::Bfs))?,
        KeyCode::Char('d') => handle_reveal_events(app, Reveal::Search(SearchMode::Dfs))?,
        KeyCode::Char('c') => handle_c_events(app),
        KeyCode::Left => handle_arrow_events(app, Direction::Left)?,
        KeyCode::Up => handle_arrow_events(app, Direction::Up)?,
        KeyCode::Right => handle_arrow_events(app, Direction::Right)?,
        KeyCode::Down => handle_arrow_events(app, Direction::Down)?,
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The size
/// menu cursor stops at the last entry.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Size) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::SizeMenu => {
            if app.size_cursor + 1 < app.sizes.len() {
                app.size_cursor += 1;
            }
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// Like the 'j' handler, behavior varies by screen and the size menu cursor stops at the first
/// entry.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Size) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu => {
            app.size_cursor = app.size_cursor.saturating_sub(1);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. Starting a
/// game generates a fresh maze of the selected size.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.start_game()?;
        }
        Screen::MainMenu(MainMenuItem::Size) => {
            app.size_cursor = app
                .sizes
                .iter()
                .position(|size| *size == app.size)
                .unwrap_or_default();
            app.screen = Screen::SizeMenu;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::SizeMenu => {
            app.size = *app
                .sizes
                .get(app.size_cursor)
                .ok_or_eyre("failed to retrieve cursor-selected size")?;
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to previous screens. It
/// handles returning from a game to the main menu and from the size menu to the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame | Screen::Solved => {
            // Drop the running game and return to main menu
            app.game = None;
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu => {
            app.screen = Screen::MainMenu(MainMenuItem::Size);
        }
        Screen::MainMenu(_) => {}
    }
}

/// Handles 'r' key press events by generating a new maze of the same size.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if matches!(app.screen, Screen::InGame | Screen::Solved) {
        app.start_game()?;
    }

    Ok(())
}

/// Handles arrow key events by moving the player through open passages.
///
/// Reaching the goal switches to the solved screen, where the answer is shown in full.
pub(crate) fn handle_arrow_events(app: &mut App, direction: Direction) -> Result<()> {
    if app.screen != Screen::InGame {
        return Ok(());
    }

    let game = app
        .game
        .as_mut()
        .ok_or_eyre("failed to retrieve the running game")?;
    game.move_player(direction)?;

    if game.is_solved() {
        info!(seed = game.seed, steps = game.player.trail.len(), "maze solved");
        game.show_answer()?;
        app.screen = Screen::Solved;
    }

    Ok(())
}

/// Handles 'c' key press events by hiding whatever path is revealed over the maze.
pub(crate) fn handle_c_events(app: &mut App) {
    if let (Screen::InGame, Some(game)) = (&app.screen, app.game.as_mut()) {
        game.replay.clear();
    }
}

/// Handles reveal key events by replaying the requested path list over the maze.
pub(crate) fn handle_reveal_events(app: &mut App, kind: Reveal) -> Result<()> {
    if app.screen != Screen::InGame {
        return Ok(());
    }

    app.game
        .as_mut()
        .ok_or_eyre("failed to retrieve the running game")?
        .reveal(kind)
}
