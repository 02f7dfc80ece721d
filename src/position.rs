//! Player token position on the maze grid.

use crate::level::MazeGrid;

/// Row and column of the player token.
///
/// Both coordinates are 0-indexed with row 0 at the top of the maze. A position handed out by
/// [`PlayerState::initialize`] or an accepted move always lies within the grid it was computed
/// against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlayerState {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl PlayerState {
    /// Builds a position from its coordinates.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Places the player on the start tile of a freshly loaded maze.
    ///
    /// The start tile is the first open tile in row-major order, see
    /// [`MazeGrid::start_position`].
    #[must_use]
    pub fn initialize(grid: &MazeGrid) -> Self {
        grid.start_position()
    }

    /// Shifts the position by a signed delta.
    ///
    /// Returns [`None`] when either coordinate would drop below zero or overflow. The upper grid
    /// bounds are not known here and are checked by the caller.
    #[must_use]
    pub const fn offset(self, row_delta: isize, column_delta: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(column) = self.column.checked_add_signed(column_delta) else {
            return None;
        };

        Some(Self { row, column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_range() {
        let position = PlayerState::new(2, 3);

        assert_eq!(position.offset(1, 0), Some(PlayerState::new(3, 3)));
        assert_eq!(position.offset(0, -1), Some(PlayerState::new(2, 2)));
        assert_eq!(position.offset(-2, -3), Some(PlayerState::new(0, 0)));
    }

    #[test]
    fn test_offset_below_zero() {
        let origin = PlayerState::default();

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
    }

    #[test]
    fn test_offset_overflow() {
        let position = PlayerState::new(usize::MAX, 0);

        assert_eq!(position.offset(1, 0), None);
    }

    #[test]
    fn test_initialize_uses_first_open_tile() {
        let grid = MazeGrid::from_lines(["110", "000", "*00"]).expect("maze should parse");

        assert_eq!(PlayerState::initialize(&grid), PlayerState::new(0, 2));
    }
}
