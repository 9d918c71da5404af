//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    cli::{self, Settings},
    events,
    game::Game,
    types::{MainMenuItem, Screen},
    ui,
};

/// Maze sizes offered in the size menu, as columns by rows.
pub(crate) const SIZE_PRESETS: [(usize, usize); 5] = [(2, 2), (3, 4), (10, 5), (27, 14), (100, 60)];

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Settings the application was started with.
    pub(crate) settings: Settings,
    /// Sizes listed in the size menu.
    ///
    /// This field holds the preset sizes, followed by the size given on the command line when it is
    /// not one of the presets.
    pub(crate) sizes: Vec<(usize, usize)>,
    /// Index of the size under the cursor in the size menu.
    pub(crate) size_cursor: usize,
    /// Size of the next maze to generate, as columns by rows.
    pub(crate) size: (usize, usize),
    /// Game currently being played, if any.
    ///
    /// This field is filled when a game starts and emptied when the user returns to the main
    /// menu, so every new game gets a freshly generated maze.
    pub(crate) game: Option<Game>,
    /// Seed of the next maze when seeds are fixed.
    ///
    /// This field starts at the seed given on the command line and advances by one for every
    /// generated maze. When it is `None`, every maze draws a random seed.
    pub(crate) next_seed: Option<u64>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the given settings.
    ///
    /// No maze is generated until the user starts a game.
    pub fn new(settings: Settings) -> Self {
        let size = (settings.width, settings.height);
        let mut sizes = SIZE_PRESETS.to_vec();
        if !sizes.contains(&size) {
            sizes.push(size);
        }

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            settings,
            sizes,
            size_cursor: 0,
            size,
            game: None,
            next_seed: settings.seed,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - Maze generation failures surfaced by the event handlers
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Generates a maze of the selected size and switches to the in-game screen.
    ///
    /// A maze whose start is already its goal goes straight to the solved screen with the answer
    /// shown.
    ///
    /// # Errors
    ///
    /// This function may return errors if the selected size cannot be built or drawn.
    pub(crate) fn start_game(&mut self) -> Result<()> {
        let (width, height) = self.size;
        cli::check_size(width, height)?;
        let seed = self.take_seed();
        let mut game = Game::new(width, height, seed, self.settings.tick)?;
        info!(width, height, seed, "new maze generated");

        self.screen = if game.is_solved() {
            info!(seed, steps = 0, "maze solved");
            game.show_answer()?;
            Screen::Solved
        } else {
            Screen::InGame
        };
        self.game = Some(game);

        Ok(())
    }

    /// Seed for the next maze, advancing the fixed seed if there is one.
    fn take_seed(&mut self) -> u64 {
        match self.next_seed {
            Some(seed) => {
                self.next_seed = Some(seed.wrapping_add(1));
                seed
            }
            None => rand::random(),
        }
    }
}
