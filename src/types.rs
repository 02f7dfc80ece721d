//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game, with the highlighted item.
    MainMenu(MainMenuItem),
    /// Static page explaining the goal, the controls and the tiles.
    Tutorial,
    /// Table of the fastest recorded times.
    HighScores,
    /// In-game screen where the maze is displayed and played.
    InGame,
    /// Prompt asking for the player's name after reaching the end tile.
    NameEntry,
    /// Result screen shown once the score has been recorded, with the highlighted item.
    GameOver(GameOverItem),
}

/// Shared behavior of the items of a vertical menu.
///
/// Navigation stops at the first and last items instead of wrapping around.
pub(crate) trait MenuItem: Copy + PartialEq + Sized + 'static {
    /// Every item, in display order.
    const ALL: &'static [Self];

    /// Text shown for the item.
    fn label(self) -> &'static str;

    /// Position of the item in [`ALL`](MenuItem::ALL).
    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .unwrap_or_default()
    }

    /// Item below this one, or this one when it is the last.
    fn next(self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    /// Item above this one, or this one when it is the first.
    fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .unwrap_or(self)
    }
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// Starts a game on a random maze.
    PlayGame,
    /// Opens the tutorial page.
    Tutorial,
    /// Opens the high-score table.
    HighScores,
    /// Leaves the application.
    Quit,
}

impl MenuItem for MainMenuItem {
    const ALL: &'static [Self] = &[Self::PlayGame, Self::Tutorial, Self::HighScores, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::PlayGame => "Play Game",
            Self::Tutorial => "Tutorial",
            Self::HighScores => "High Scores",
            Self::Quit => "Quit",
        }
    }
}

/// Options offered after a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameOverItem {
    /// Starts another game on a new random maze.
    PlayAgain,
    /// Returns to the main menu.
    MainMenu,
}

impl MenuItem for GameOverItem {
    const ALL: &'static [Self] = &[Self::PlayAgain, Self::MainMenu];

    fn label(self) -> &'static str {
        match self {
            Self::PlayAgain => "Play Again",
            Self::MainMenu => "Main Menu",
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics of each menu drawn with the shared menu layout: its title
/// and its number of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu,
    /// Game-over menu configuration.
    GameOver,
}

impl MenuType {
    /// Returns the title drawn in the menu's border.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::MainMenu => "Maze Explorer",
            Self::GameOver => "You Escaped the Maze!",
        }
    }

    /// Returns the number of entries in the menu, used to size its container.
    pub(crate) fn value(self) -> u8 {
        let count = match self {
            Self::MainMenu => MainMenuItem::ALL.len(),
            Self::GameOver => GameOverItem::ALL.len(),
        };

        u8::try_from(count).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::PlayGame);
        let game_over = Screen::GameOver(GameOverItem::PlayAgain);

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::PlayGame));
        assert_ne!(main_menu, Screen::MainMenu(MainMenuItem::Quit));
        assert_ne!(game_over, Screen::GameOver(GameOverItem::MainMenu));
        assert_ne!(Screen::InGame, Screen::NameEntry);
    }

    #[test]
    fn test_main_menu_navigation() {
        assert_eq!(MainMenuItem::PlayGame.next(), MainMenuItem::Tutorial);
        assert_eq!(MainMenuItem::Tutorial.next(), MainMenuItem::HighScores);
        assert_eq!(MainMenuItem::HighScores.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);

        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::HighScores);
        assert_eq!(MainMenuItem::Tutorial.previous(), MainMenuItem::PlayGame);
        assert_eq!(MainMenuItem::PlayGame.previous(), MainMenuItem::PlayGame);
    }

    #[test]
    fn test_game_over_navigation() {
        assert_eq!(GameOverItem::PlayAgain.next(), GameOverItem::MainMenu);
        assert_eq!(GameOverItem::MainMenu.next(), GameOverItem::MainMenu);
        assert_eq!(GameOverItem::MainMenu.previous(), GameOverItem::PlayAgain);
        assert_eq!(GameOverItem::PlayAgain.previous(), GameOverItem::PlayAgain);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = MainMenuItem::ALL.iter().map(|item| item.label()).collect();

        assert_eq!(labels, vec!["Play Game", "Tutorial", "High Scores", "Quit"]);
        assert_eq!(GameOverItem::PlayAgain.label(), "Play Again");
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu.repr(), "Maze Explorer");
        assert_eq!(MenuType::GameOver.repr(), "You Escaped the Maze!");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu.value(), 4);
        assert_eq!(MenuType::GameOver.value(), 2);
    }
}
