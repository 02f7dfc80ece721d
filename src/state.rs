//! State of a single game in progress.

use std::time::Instant;

use log::{debug, info};

use crate::{
    clock::GameTimer,
    level::MazeGrid,
    movement::{self, Direction, MoveResult},
    position::PlayerState,
};

/// One play-through of one maze.
///
/// The session owns everything that changes while a maze is being played: the player position,
/// the timer and the win flag. It is created when a maze has been loaded and dropped when the
/// player leaves the game screen or starts a new game.
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Maze being played.
    grid: MazeGrid,
    /// Current position of the player token.
    player: PlayerState,
    /// Elapsed-time counter, started with the session.
    timer: GameTimer,
    /// Whether an end tile has been reached.
    won: bool,
    /// Human-readable name of the maze, usually its file name.
    label: String,
}

impl GameSession {
    /// Starts a new game on the given maze.
    ///
    /// The player is placed on the start tile and the timer starts counting immediately.
    #[must_use]
    pub fn new(grid: MazeGrid, label: String) -> Self {
        let player = PlayerState::initialize(&grid);
        let mut timer = GameTimer::new();
        timer.start();

        debug!("starting session on {label} at {player:?}");

        Self {
            grid,
            player,
            timer,
            won: false,
            label,
        }
    }

    /// Maze being played.
    #[must_use]
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Current position of the player token.
    #[must_use]
    pub const fn player(&self) -> PlayerState {
        self.player
    }

    /// Elapsed-time counter of this game.
    #[must_use]
    pub const fn timer(&self) -> &GameTimer {
        &self.timer
    }

    /// Whether an end tile has been reached.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Name of the maze being played.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Seconds elapsed since the game started, frozen once the game is won.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    /// Moves the player one step and applies the outcome.
    ///
    /// An accepted move updates the player position; a winning move also stops the timer after
    /// counting the seconds elapsed since its last update. Once the game is won further requests
    /// are ignored and [`None`] is returned.
    pub fn step(&mut self, direction: Direction) -> Option<MoveResult> {
        self.step_at(direction, Instant::now())
    }

    /// Same as [`step`](GameSession::step), with the wall-clock time of the move given.
    fn step_at(&mut self, direction: Direction, now: Instant) -> Option<MoveResult> {
        if self.won {
            return None;
        }

        let result = movement::attempt_step(&self.grid, self.player, direction);
        self.player = result.resolve(self.player);

        if result.is_win() {
            self.timer.advance_to(now);
            self.timer.stop();
            self.won = true;
            info!(
                "maze {} solved in {} seconds",
                self.label,
                self.timer.elapsed_seconds()
            );
        }

        Some(result)
    }

    /// Advances the timer according to the wall clock.
    pub fn update(&mut self) {
        self.timer.update();
    }

    /// Advances the timer by exactly one second.
    pub fn tick(&mut self) {
        self.timer.tick();
    }
}
