//! Core application state and logic for the maze game.

use std::error::Error;

use color_eyre::eyre::Result;
use log::{error, warn};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    file_loader::{self, LoadError},
    highscores::{ScoreEntry, ScoreStore},
    level::MazeGrid,
    state::GameSession,
    types::{GameOverItem, MainMenuItem, Screen},
    ui,
};

/// Longest name accepted on the name entry screen, in characters.
pub(crate) const MAX_NAME_LENGTH: usize = 24;

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
    pub(crate) screen: Screen,
    /// Settings the application was started with.
    pub(crate) config: Config,
    /// Persistent high-score table.
    pub(crate) scores: ScoreStore,
    /// Game being played, if any.
    ///
    /// The session is created when a maze has been loaded and kept until the next game starts or
    /// the player returns to the main menu, so the result screens can still read the final time.
    pub(crate) session: Option<GameSession>,
    /// Records shown on the high-score screen, refreshed every time the screen is opened.
    pub(crate) high_scores: Vec<ScoreEntry>,
    /// Name typed so far on the name entry screen.
    pub(crate) name_input: String,
    /// Record saved for the last finished game.
    pub(crate) last_score: Option<ScoreEntry>,
    /// Error message shown on the main menu after a failed operation.
    pub(crate) status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the given settings.
    ///
    /// No file is touched here: mazes are loaded when a game starts and scores when they are
    /// displayed.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::PlayGame),
            scores: config.score_store(),
            config,
            session: None,
            high_scores: Vec::new(),
            name_input: String::new(),
            last_score: None,
            status: None,
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
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(|err| std::io::Error::other(err.to_string()))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Loads the configured maze, or a random one from the maze directory.
    fn load_maze(&self) -> Result<(String, MazeGrid), LoadError> {
        if let Some(path) = &self.config.maze {
            let grid = file_loader::load_maze(path)?;
            return Ok((file_loader::maze_label(path), grid));
        }

        let mut rng = rand::rng();
        let (file, grid) = file_loader::load_random_maze(&self.config.mazes_dir, &mut rng)?;
        Ok((file.label(), grid))
    }

    /// Starts a new game.
    ///
    /// On success the in-game screen is shown with a fresh session. When no maze can be loaded
    /// the reason is shown on the main menu instead.
    pub(crate) fn start_game(&mut self) {
        match self.load_maze() {
            Ok((label, grid)) => {
                self.session = Some(GameSession::new(grid, label));
                self.status = None;
                self.screen = Screen::InGame;
            }
            Err(err) => {
                let message = error_chain(&err);
                error!("failed to start game: {message}");
                self.session = None;
                self.status = Some(message);
                self.screen = Screen::MainMenu(MainMenuItem::PlayGame);
            }
        }
    }

    /// Abandons the current game and returns to the main menu.
    pub(crate) fn leave_game(&mut self) {
        self.session = None;
        self.screen = Screen::MainMenu(MainMenuItem::PlayGame);
    }

    /// Switches to the name entry screen after the maze has been solved.
    pub(crate) fn finish_game(&mut self) {
        self.name_input.clear();
        self.screen = Screen::NameEntry;
    }

    /// Records the time of the finished game under the typed name.
    ///
    /// A failed write is reported on the main menu status line; the game-over screen is shown
    /// either way.
    pub(crate) fn save_score(&mut self) {
        let seconds = self
            .session
            .as_ref()
            .map_or(0, GameSession::elapsed_seconds);

        match self.scores.append(&self.name_input, seconds) {
            Ok(entry) => self.last_score = Some(entry),
            Err(err) => {
                error!("failed to save score: {err:#}");
                self.status = Some(format!("{err:#}"));
                self.last_score = None;
            }
        }

        self.name_input.clear();
        self.screen = Screen::GameOver(GameOverItem::PlayAgain);
    }

    /// Reloads the high-score table and shows it.
    pub(crate) fn open_high_scores(&mut self) {
        match self.scores.top(self.config.top) {
            Ok(entries) => self.high_scores = entries,
            Err(err) => {
                warn!("failed to read high scores: {err:#}");
                self.high_scores.clear();
                self.status = Some(format!("{err:#}"));
            }
        }

        self.screen = Screen::HighScores;
    }

    /// Advances the game clock while a game is on screen.
    pub(crate) fn tick(&mut self) {
        if self.screen == Screen::InGame {
            if let Some(session) = &mut self.session {
                session.update();
            }
        }
    }
}

/// Joins an error and all of its sources into a single line.
fn error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&current| current.source())
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(": ")
}
