//! Movement, collision and win detection.
//!
//! Everything here is pure: a move is computed from the grid, the current position and a delta,
//! and the caller decides what to do with the outcome.

use crate::{cell::TileType, level::MazeGrid, position::PlayerState};

/// The four directions the input layer can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row towards the top.
    Up,
    /// One row towards the bottom.
    Down,
    /// One column towards the left.
    Left,
    /// One column towards the right.
    Right,
}

impl Direction {
    /// Row and column delta of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Why a move was not carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The target lies outside the grid.
    OutOfBounds,
    /// The target is a wall.
    Blocked,
}

/// Outcome of a movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// The player moves onto `position`; `won` is set when that tile is an end tile.
    Accepted {
        /// Position after the move.
        position: PlayerState,
        /// Whether the move reached an end tile.
        won: bool,
    },
    /// The player stays where they are.
    Rejected(Rejection),
}

impl MoveResult {
    /// Position of the player once this outcome is applied to `current`.
    #[must_use]
    pub const fn resolve(self, current: PlayerState) -> PlayerState {
        match self {
            Self::Accepted { position, .. } => position,
            Self::Rejected(_) => current,
        }
    }

    /// Whether this outcome ends the game.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Accepted { won: true, .. })
    }
}

/// Resolves a move of the player token.
///
/// The target is `position` shifted by `(row_delta, column_delta)`. Targets outside the grid are
/// rejected as [`Rejection::OutOfBounds`] and walls as [`Rejection::Blocked`]; open and end tiles
/// are accepted, the latter as a win. The size of the delta is not restricted.
#[must_use]
pub fn attempt_move(
    grid: &MazeGrid,
    position: PlayerState,
    row_delta: isize,
    column_delta: isize,
) -> MoveResult {
    let Some(target) = position.offset(row_delta, column_delta) else {
        return MoveResult::Rejected(Rejection::OutOfBounds);
    };
    let Some(tile) = grid.tile_at(target) else {
        return MoveResult::Rejected(Rejection::OutOfBounds);
    };

    match tile.kind() {
        TileType::Wall => MoveResult::Rejected(Rejection::Blocked),
        TileType::Open => MoveResult::Accepted {
            position: target,
            won: false,
        },
        TileType::End => MoveResult::Accepted {
            position: target,
            won: true,
        },
    }
}

/// Resolves a single step in one of the four input directions.
#[must_use]
pub fn attempt_step(grid: &MazeGrid, position: PlayerState, direction: Direction) -> MoveResult {
    let (row_delta, column_delta) = direction.delta();
    attempt_move(grid, position, row_delta, column_delta)
}
