//! Player movement and wall collisions.
//!
//! This module resolves a single directional step against the maze grid. Stepping off the grid is a
//! silent no-op, stepping into a wall blocks the move and costs a life, and stepping onto a path
//! moves the player.

use std::collections::BTreeSet;

use tracing::debug;

use crate::maze::{Grid, Position, TileKind};

/// Set of walls the player has walked into.
///
/// The set only ever grows during a session; it is dropped together with the session on reset.
pub type RevealedWalls = BTreeSet<Position>;

/// Direction of a single player step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Returns the unit `(dx, dy)` delta of the direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Result of resolving one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player position after the step.
    pub position: Position,
    /// Lives left after the step.
    pub lives: u8,
    /// Whether the step ran into a wall.
    pub collided: bool,
}

/// Resolves a step from `position` towards `direction`.
///
/// A target outside the grid leaves everything untouched. A wall target is recorded into
/// `revealed`, costs one life (never going below zero) and keeps the player in place. A path
/// target moves the player. Recording the wall is the only side effect.
pub fn resolve(
    grid: &Grid,
    position: Position,
    direction: Direction,
    lives: u8,
    revealed: &mut RevealedWalls,
) -> MoveOutcome {
    let (dx, dy) = direction.delta();
    let Some(target) = position.offset(dx, dy, grid.side()) else {
        return MoveOutcome {
            position,
            lives,
            collided: false,
        };
    };

    match grid.tile(target) {
        Some(TileKind::Wall) => {
            let _ = revealed.insert(target);
            let lives = lives.saturating_sub(1);
            debug!(x = target.x, y = target.y, lives, "walked into a wall");

            MoveOutcome {
                position,
                lives,
                collided: true,
            }
        }
        Some(TileKind::Path) => MoveOutcome {
            position: target,
            lives,
            collided: false,
        },
        None => MoveOutcome {
            position,
            lives,
            collided: false,
        },
    }
}
