//! Maze grid parsing and validation.
//!
//! This module turns the text of a maze file into an immutable [`MazeGrid`]. A maze file is a
//! rectangle of `0` (open), `1` (wall) and `*` (end) characters, one row per line, without any
//! header or metadata.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    cell::{Tile, TileType},
    position::PlayerState,
};

/// Reasons a maze text is rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text holds no rows, or its first row holds no tiles.
    #[error("maze contains no tiles")]
    Empty,
    /// A character outside the tile alphabet was found.
    #[error("invalid tile character {character:?} at row {row}, column {column}")]
    InvalidTileCharacter {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        column: usize,
        /// The offending character itself.
        character: char,
    },
    /// A row is shorter or longer than the first row.
    #[error("row {row} has {found} tiles but the maze is {expected} tiles wide")]
    RaggedRow {
        /// Row with the mismatching length.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the mismatching row.
        found: usize,
    },
    /// The maze has nowhere for the player to start.
    #[error("maze has no open tile to start on")]
    NoOpenTile,
}

/// Parsed, rectangular maze.
///
/// Row 0 is the top of the maze. Every row has [`column_count`](MazeGrid::column_count) tiles
/// and at least one tile is [`TileType::Open`]. The grid is never mutated after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    /// Tiles stored row by row.
    tiles: Vec<Vec<Tile>>,
    /// Width shared by every row.
    columns: usize,
}

impl MazeGrid {
    /// Builds a grid from the rows of a maze file.
    ///
    /// Each row is validated in order: its characters first, then its width against the first
    /// row. The first failure is reported.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidTileCharacter`] for a character outside `0`, `1` and `*`
    /// - [`ParseError::RaggedRow`] for a row whose width differs from the first row
    /// - [`ParseError::Empty`] when there are no tiles at all
    /// - [`ParseError::NoOpenTile`] when no tile is open
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles: Vec<Vec<Tile>> = Vec::new();

        for (row, line) in lines.into_iter().enumerate() {
            let parsed = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(column, character)| {
                    TileType::from_char(character)
                        .map(Tile::new)
                        .ok_or(ParseError::InvalidTileCharacter {
                            row,
                            column,
                            character,
                        })
                })
                .collect::<Result<Vec<Tile>, ParseError>>()?;

            if let Some(first) = tiles.first() {
                if first.len() != parsed.len() {
                    return Err(ParseError::RaggedRow {
                        row,
                        expected: first.len(),
                        found: parsed.len(),
                    });
                }
            }

            tiles.push(parsed);
        }

        let columns = tiles.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(ParseError::Empty);
        }

        if !tiles
            .iter()
            .flatten()
            .any(|tile| tile.kind() == TileType::Open)
        {
            return Err(ParseError::NoOpenTile);
        }

        Ok(Self { tiles, columns })
    }

    /// Number of rows in the maze.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of columns in the maze.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the tile at the given coordinates, or [`None`] outside the grid.
    #[must_use]
    pub fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        self.tiles.get(row)?.get(column).copied()
    }

    /// Returns the tile under a player position, or [`None`] outside the grid.
    #[must_use]
    pub fn tile_at(&self, position: PlayerState) -> Option<Tile> {
        self.tile(position.row, position.column)
    }

    /// Start tile for a new game: the first open tile in row-major order.
    ///
    /// Parsing guarantees such a tile exists.
    #[must_use]
    pub fn start_position(&self) -> PlayerState {
        self.positions_of(TileType::Open)
            .next()
            .unwrap_or_default()
    }

    /// Iterates over every cell together with its coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (PlayerState, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(column, tile)| (PlayerState::new(row, column), *tile))
        })
    }

    /// Iterates over the coordinates of every tile of the given kind, in row-major order.
    pub fn positions_of(&self, kind: TileType) -> impl Iterator<Item = PlayerState> + '_ {
        self.cells()
            .filter(move |(_, tile)| tile.kind() == kind)
            .map(|(position, _)| position)
    }
}

impl FromStr for MazeGrid {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_maze(text)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for tile in row {
                write!(formatter, "{}", tile.kind().symbol())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

/// Parses the full text of a maze file.
///
/// Lines may end in `\n` or `\r\n`. Blank lines at the end of the text are ignored; a blank line
/// between two rows is a zero-width row and therefore ragged.
///
/// # Errors
///
/// See [`MazeGrid::from_lines`].
pub fn parse_maze(text: &str) -> Result<MazeGrid, ParseError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        let _ = lines.pop();
    }

    MazeGrid::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_maze() {
        let grid = MazeGrid::from_lines(["000", "010", "00*"]).expect("maze should parse");

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.tile(1, 1).map(Tile::kind), Some(TileType::Wall));
        assert_eq!(grid.tile(2, 2).map(Tile::kind), Some(TileType::End));
        assert_eq!(grid.tile(1, 0).map(Tile::kind), Some(TileType::Open));
    }

    #[test]
    fn test_every_tile_matches_its_character() {
        let rows = ["0101*", "11000", "*0011"];
        let grid = MazeGrid::from_lines(rows).expect("maze should parse");

        assert_eq!(grid.row_count(), rows.len());
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(grid.column_count(), line.len());
            for (column, character) in line.chars().enumerate() {
                assert_eq!(
                    grid.tile(row, column).map(Tile::kind),
                    TileType::from_char(character),
                    "tile at ({row}, {column}) should match {character:?}"
                );
            }
        }
    }

    #[test]
    fn test_tile_outside_grid() {
        let grid = MazeGrid::from_lines(["00", "0*"]).expect("maze should parse");

        assert_eq!(grid.tile(2, 0), None);
        assert_eq!(grid.tile(0, 2), None);
        assert_eq!(grid.tile_at(PlayerState::new(5, 5)), None);
    }

    #[test]
    fn test_invalid_character_reports_location() {
        let result = MazeGrid::from_lines(["000", "0x0", "00*"]);

        assert_eq!(
            result,
            Err(ParseError::InvalidTileCharacter {
                row: 1,
                column: 1,
                character: 'x',
            })
        );
    }

    #[test]
    fn test_every_foreign_character_is_rejected() {
        for character in ['2', '3', '4', ' ', '#', 'a', '.', '\u{2588}'] {
            let line = format!("0{character}*");
            let result = MazeGrid::from_lines([line.as_str()]);

            assert!(
                matches!(
                    result,
                    Err(ParseError::InvalidTileCharacter { row: 0, column: 1, character: found })
                        if found == character
                ),
                "{character:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        assert_eq!(
            MazeGrid::from_lines(["000", "00", "00*"]),
            Err(ParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            MazeGrid::from_lines(["000", "000", "000*"]),
            Err(ParseError::RaggedRow {
                row: 2,
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(MazeGrid::from_lines(Vec::<&str>::new()), Err(ParseError::Empty));
        assert_eq!(parse_maze(""), Err(ParseError::Empty));
        assert_eq!(parse_maze("\n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_maze_without_open_tile_is_rejected() {
        assert_eq!(parse_maze("11\n1*"), Err(ParseError::NoOpenTile));
    }

    #[test]
    fn test_parse_maze_handles_line_endings() {
        let unix = parse_maze("000\n010\n00*\n").expect("maze should parse");
        let windows = parse_maze("000\r\n010\r\n00*\r\n").expect("maze should parse");
        let padded = parse_maze("000\n010\n00*\n\n\n").expect("maze should parse");

        assert_eq!(unix, windows);
        assert_eq!(unix, padded);
        assert_eq!(unix.row_count(), 3);
    }

    #[test]
    fn test_blank_line_inside_grid_is_ragged() {
        assert_eq!(
            parse_maze("000\n\n00*"),
            Err(ParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 0,
            })
        );
    }

    #[test]
    fn test_start_position_is_first_open_tile() {
        let open_corner = parse_maze("000\n010\n00*").expect("maze should parse");
        let walled_corner = parse_maze("111\n100\n*00").expect("maze should parse");

        assert_eq!(open_corner.start_position(), PlayerState::new(0, 0));
        assert_eq!(walled_corner.start_position(), PlayerState::new(1, 1));
    }

    #[test]
    fn test_positions_of_end_tiles() {
        let grid = parse_maze("*00\n010\n00*").expect("maze should parse");
        let ends: Vec<PlayerState> = grid.positions_of(TileType::End).collect();

        assert_eq!(ends, vec![PlayerState::new(0, 0), PlayerState::new(2, 2)]);
    }

    #[test]
    fn test_display_writes_maze_back() {
        let text = "000\n010\n00*\n";
        let grid: MazeGrid = text.parse().expect("maze should parse");

        assert_eq!(grid.to_string(), text);
    }
}
