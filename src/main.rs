//! This crate contains the source code for the binary for the game maze-explorer.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use maze_explorer::{init_logging, ranking_lines, App, Config, NO_SCORES};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    init_logging(&config)?;

    if config.print_scores {
        return print_scores(&config);
    }

    let mut terminal = ratatui::init();
    let result = App::new(config).run(&mut terminal);
    ratatui::restore();

    result
}

/// Prints the high-score table to standard output.
fn print_scores(config: &Config) -> Result<()> {
    let entries = config.score_store().top(config.top)?;

    if entries.is_empty() {
        println!("{NO_SCORES}");
    }
    for line in ranking_lines(&entries) {
        println!("{line}");
    }

    Ok(())
}
