//! Tile kinds and the immutable cells a maze is made of.

/// Kind of a single maze cell.
///
/// This enumeration is closed: every character of a maze file maps to exactly one of these
/// variants or the file is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Walkable floor.
    Open,
    /// Impassable wall.
    Wall,
    /// Goal tile; stepping on it wins the game.
    End,
}

impl TileType {
    /// Maps a maze file character to its tile kind.
    ///
    /// Returns [`None`] for anything outside the `0`, `1` and `*` alphabet.
    #[must_use]
    pub const fn from_char(character: char) -> Option<Self> {
        match character {
            '0' => Some(Self::Open),
            '1' => Some(Self::Wall),
            '*' => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the character this tile kind is written as in a maze file.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '0',
            Self::Wall => '1',
            Self::End => '*',
        }
    }

    /// Whether the player token may stand on this kind of tile.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// A single maze cell.
///
/// Tiles are created once while parsing and never change afterwards; the maze layout is static
/// for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Kind of this cell.
    kind: TileType,
}

impl Tile {
    /// Wraps a tile kind into a cell.
    #[must_use]
    pub const fn new(kind: TileType) -> Self {
        Self { kind }
    }

    /// Returns the kind of this cell.
    #[must_use]
    pub const fn kind(self) -> TileType {
        self.kind
    }
}
