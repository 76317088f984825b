//! Type definitions and enums for the application state, navigation and input.

use crate::{movement::Direction, session::Difficulty};

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Difficulty selection screen.
    ///
    /// This variant represents the menu listing the difficulty presets. Picking one starts a game
    /// right away.
    DifficultyMenu(DifficultyMenuItem),
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is memorized and walked. The session being
    /// played is owned by the application alongside the screen.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Play" menu option, starting a game at the current difficulty.
    Play,
    /// "Difficulty" menu option.
    Difficulty,
    /// "Quit" menu option.
    Quit,
}

/// Difficulty menu navigation choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DifficultyMenuItem {
    /// One of the difficulty presets.
    Preset(Difficulty),
    /// "Back" navigation option.
    Back,
}

impl DifficultyMenuItem {
    /// Menu entries in display order.
    pub(crate) const ALL: [Self; 4] = [
        Self::Preset(Difficulty::Easy),
        Self::Preset(Difficulty::Medium),
        Self::Preset(Difficulty::Hard),
        Self::Back,
    ];

    /// Returns the entry below this one, staying on the last entry.
    pub(crate) fn next(self) -> Self {
        Self::ALL
            .iter()
            .skip_while(|item| **item != self)
            .nth(1)
            .copied()
            .unwrap_or(self)
    }

    /// Returns the entry above this one, staying on the first entry.
    pub(crate) fn previous(self) -> Self {
        Self::ALL
            .iter()
            .rev()
            .skip_while(|item| **item != self)
            .nth(1)
            .copied()
            .unwrap_or(self)
    }

    /// Returns the label shown for the entry.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Preset(difficulty) => difficulty.repr(),
            Self::Back => "Return",
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Difficulty menu configuration.
    DifficultyMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::DifficultyMenu(_) => "Difficulty",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::DifficultyMenu(value) => *value,
        }
    }
}

/// Logical input event, independent of the device that produced it.
///
/// Key presses are translated into these before they reach the game. Quitting never gets here; the
/// event loop handles it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputEvent {
    /// Step the player one tile.
    Move(Direction),
    /// Start a new game at the given preset.
    SelectDifficulty(Difficulty),
    /// Start a new maze with the current settings.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::Play);
        let difficulty_menu = Screen::DifficultyMenu(DifficultyMenuItem::Back);
        let in_game = Screen::InGame;

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::Play));
        assert_ne!(main_menu, in_game);
        assert_ne!(difficulty_menu, in_game);
    }

    #[test]
    fn test_difficulty_menu_next() {
        assert_eq!(
            DifficultyMenuItem::Preset(Difficulty::Easy).next(),
            DifficultyMenuItem::Preset(Difficulty::Medium)
        );
        assert_eq!(
            DifficultyMenuItem::Preset(Difficulty::Hard).next(),
            DifficultyMenuItem::Back
        );
        assert_eq!(DifficultyMenuItem::Back.next(), DifficultyMenuItem::Back);
    }

    #[test]
    fn test_difficulty_menu_previous() {
        assert_eq!(
            DifficultyMenuItem::Back.previous(),
            DifficultyMenuItem::Preset(Difficulty::Hard)
        );
        assert_eq!(
            DifficultyMenuItem::Preset(Difficulty::Easy).previous(),
            DifficultyMenuItem::Preset(Difficulty::Easy)
        );
    }

    #[test]
    fn test_difficulty_menu_repr() {
        let labels: Vec<&str> = DifficultyMenuItem::ALL
            .iter()
            .map(|item| item.repr())
            .collect();

        assert_eq!(labels, vec!["Easy", "Medium", "Hard", "Return"]);
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu(3).repr(), "Main Menu");
        assert_eq!(MenuType::DifficultyMenu(4).repr(), "Difficulty");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu(3).value(), 3);
        assert_eq!(MenuType::DifficultyMenu(4).value(), 4);
    }
}
