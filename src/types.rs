//! Type definitions and enums for the application state and navigation.

use crate::search::SearchMode;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Maze size selection screen.
    ///
    /// This variant represents the size menu, listing the board sizes the user may pick from. The
    /// cursor position lives in the application state.
    SizeMenu,
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is displayed, walked and solved.
    InGame,
    /// Solved maze screen.
    ///
    /// This variant represents the end screen shown once the player reaches the goal.
    Solved,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    ///
    /// This variant represents the "Start Game" option in the main menu.
    StartGame,
    /// "Size" menu option.
    ///
    /// This variant represents the "Size" option in the main menu.
    Size,
    /// "Quit" menu option.
    ///
    /// This variant represents the "Quit" option in the main menu.
    Quit,
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface.
pub(crate) enum MenuType {
    /// Main menu configuration.
    ///
    /// This variant represents the main menu in the game.
    MainMenu(u8),
    /// Size menu configuration.
    ///
    /// This variant represents the size menu in the game.
    SizeMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::SizeMenu(_) => "Maze Size",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::SizeMenu(value) => *value,
        }
    }
}

/// Path lists that can be replayed over the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reveal {
    /// Cheapest route from the start to the goal.
    Answer,
    /// Discovery order of a breadth-first or depth-first search.
    Search(SearchMode),
}
