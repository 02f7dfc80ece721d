//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::highscores::ScoreStore;

/// Default directory scanned for maze files.
pub const DEFAULT_MAZES_DIR: &str = "resources/mazes";

/// Default location of the high-score file.
pub const DEFAULT_SCORES_FILE: &str = "resources/highscores.csv";

/// Default number of records shown on the high-score table.
pub const DEFAULT_TOP_SCORES: usize = 10;

/// Runtime settings of the game.
///
/// Every field maps to a command-line flag; the [`Default`] implementation matches running the
/// binary without any flag.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Directory holding the `maze<number>.txt` files a game is picked from.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_MAZES_DIR)]
    pub mazes_dir: PathBuf,
    /// Always play this maze file instead of a random one.
    #[arg(long, value_name = "FILE")]
    pub maze: Option<PathBuf>,
    /// File the high scores are appended to.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SCORES_FILE)]
    pub scores_file: PathBuf,
    /// Number of records shown on the high-score table.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_SCORES)]
    pub top: usize,
    /// Print the high-score table and exit.
    #[arg(long)]
    pub print_scores: bool,
    /// Write logs to this file. Logging is disabled without it.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    /// Maximum level of the messages written to the log file.
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mazes_dir: PathBuf::from(DEFAULT_MAZES_DIR),
            maze: None,
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            top: DEFAULT_TOP_SCORES,
            print_scores: false,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Score store backed by the configured file.
    #[must_use]
    pub fn score_store(&self) -> ScoreStore {
        ScoreStore::new(self.scores_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_no_flags_match_default() {
        let config = Config::try_parse_from(["maze-explorer"]).expect("parsing should succeed");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_all_flags() {
        let config = Config::try_parse_from([
            "maze-explorer",
            "--mazes-dir",
            "levels",
            "--maze",
            "levels/maze3.txt",
            "--scores-file",
            "scores.csv",
            "--top",
            "5",
            "--print-scores",
            "--log-file",
            "game.log",
            "--log-level",
            "debug",
        ])
        .expect("parsing should succeed");

        assert_eq!(config.mazes_dir, PathBuf::from("levels"));
        assert_eq!(config.maze, Some(PathBuf::from("levels/maze3.txt")));
        assert_eq!(config.scores_file, PathBuf::from("scores.csv"));
        assert_eq!(config.top, 5);
        assert!(config.print_scores);
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.score_store().path(), PathBuf::from("scores.csv"));
    }

    #[test]
    fn test_invalid_top_is_rejected() {
        assert!(Config::try_parse_from(["maze-explorer", "--top", "many"]).is_err());
    }
}
