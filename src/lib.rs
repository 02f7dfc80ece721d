//! Maze Explorer: a terminal maze game.
//!
//! A maze is picked at random from a directory of `maze<number>.txt` files, each a rectangle of
//! `0` (open), `1` (wall) and `*` (end) characters. The player walks from the start tile to an end
//! tile while a timer runs, and the time is appended to a plain-text high-score file.
//!
//! The game logic is usable without the terminal front end: [`parse_maze`] builds a
//! [`MazeGrid`], [`PlayerState::initialize`] places the player on it, [`attempt_move`] resolves
//! movement and win detection, and [`ScoreStore`] appends and ranks the recorded times. The
//! terminal front end is started through [`App::run`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cell;
mod clock;
mod config;
mod events;
mod file_loader;
mod highscores;
mod level;
mod logging;
mod movement;
mod position;
mod state;
mod types;
mod ui;

pub use crate::{
    app::App,
    cell::{Tile, TileType},
    clock::GameTimer,
    config::{Config, DEFAULT_MAZES_DIR, DEFAULT_SCORES_FILE, DEFAULT_TOP_SCORES},
    file_loader::{
        choose_maze, discover_mazes, load_maze, load_random_maze, maze_label, maze_number,
        LoadError, MazeFile,
    },
    highscores::{
        ranking_lines, sanitize_name, ScoreEntry, ScoreStore, ANONYMOUS, NO_SCORES,
    },
    level::{parse_maze, MazeGrid, ParseError},
    logging::init as init_logging,
    movement::{attempt_move, attempt_step, Direction, MoveResult, Rejection},
    position::PlayerState,
    state::GameSession,
};
