//! Maze grid data and generation.
//!
//! This module contains the square tile grid the game is played on, along with the generator that
//! fills it. Every generated grid carries an open border path running down the first column and
//! along the last row, so the finish is always reachable from the start without relying on the
//! randomly drawn interior.

use rand::Rng;

/// Smallest grid side the generator accepts.
pub const MIN_SIDE: usize = 2;

/// Largest grid side the generator accepts.
///
/// This bound keeps the rendered maze within a regular terminal; the game logic itself has no
/// upper limit.
pub const MAX_SIDE: usize = 32;

/// Kind of a single maze tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Traversable tile.
    Path,
    /// Blocking tile. Walking into one costs a life.
    Wall,
}

/// Grid coordinate of a tile.
///
/// The `x` component grows to the right (column index) and the `y` component grows downwards
/// (row index), so the start sits at `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Builds a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offsets the position by a signed delta, staying inside a grid of the given side.
    ///
    /// Returns `None` whenever either component would leave the `[0, side)` range.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize, side: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx).filter(|x| *x < side)?;
        let y = self.y.checked_add_signed(dy).filter(|y| *y < side)?;

        Some(Self { x, y })
    }
}

/// Immutable square grid of tiles.
///
/// Tiles are stored row by row. The grid is never mutated after construction; a new one is built
/// every time a session is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Length of each side of the grid.
    side: usize,
    /// Row-major tile storage holding `side * side` entries.
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Generates a random grid with a guaranteed border path.
    ///
    /// Every tile independently becomes a wall on a fair coin flip drawn from `rng`. Afterwards the
    /// first column and the last row are forced open, overriding whatever was drawn there. Nothing
    /// else about connectivity is guaranteed; the interior may be cut off in arbitrary ways.
    ///
    /// Passing a seeded generator makes the result fully reproducible.
    ///
    /// # Panics
    ///
    /// Panics if `side` is smaller than [`MIN_SIDE`].
    pub fn generate<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Self {
        assert!(side >= MIN_SIDE, "maze side must be at least {MIN_SIDE}");

        let tiles = (0..side * side)
            .map(|_| {
                if rng.random::<bool>() {
                    TileKind::Wall
                } else {
                    TileKind::Path
                }
            })
            .collect();

        let mut grid = Self { side, tiles };
        grid.carve_border_path();

        grid
    }

    /// Builds a grid from an explicit list of wall positions.
    ///
    /// Every position not listed is a path. Walls that fall outside the grid are ignored, and the
    /// border path is carved exactly as [`Grid::generate`] does, so listed walls on the first
    /// column or the last row are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `side` is smaller than [`MIN_SIDE`].
    pub fn from_walls<I>(side: usize, walls: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        assert!(side >= MIN_SIDE, "maze side must be at least {MIN_SIDE}");

        let mut grid = Self {
            side,
            tiles: vec![TileKind::Path; side * side],
        };
        for wall in walls {
            if let Some(tile) = grid.tile_mut(wall) {
                *tile = TileKind::Wall;
            }
        }
        grid.carve_border_path();

        grid
    }

    /// Forces the first column and the last row open.
    fn carve_border_path(&mut self) {
        let last = self.side - 1;
        for idx in 0..self.side {
            for position in [Position::new(0, idx), Position::new(idx, last)] {
                if let Some(tile) = self.tile_mut(position) {
                    *tile = TileKind::Path;
                }
            }
        }
    }

    /// Returns the length of each side of the grid.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Returns whether the position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.side && position.y < self.side
    }

    /// Returns the tile at the position, or `None` when it lies outside the grid.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.index(position)
            .and_then(|idx| self.tiles.get(idx))
            .copied()
    }

    /// Returns a mutable handle to the tile at the position.
    fn tile_mut(&mut self, position: Position) -> Option<&mut TileKind> {
        self.index(position).and_then(|idx| self.tiles.get_mut(idx))
    }

    /// Maps a position to its row-major storage index.
    const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.side + position.x)
        } else {
            None
        }
    }

    /// Iterates over every position holding a wall, row by row.
    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == TileKind::Wall)
            .map(|(idx, _)| Position::new(idx % self.side, idx / self.side))
    }

    /// Returns the guaranteed border path from the top-left to the bottom-right corner.
    ///
    /// The path runs down the first column and then right along the last row, with each position
    /// adjacent to the previous one.
    #[must_use]
    pub fn border_path(&self) -> Vec<Position> {
        let last = self.side - 1;
        (0..self.side)
            .map(|y| Position::new(0, y))
            .chain((1..self.side).map(|x| Position::new(x, last)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng as _};

    proptest! {
        #[test]
        fn test_generate_keeps_border_open(side in MIN_SIDE..=MAX_SIDE, seed in any::<u64>()) {
            let grid = Grid::generate(side, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(grid.side(), side);
            for idx in 0..side {
                prop_assert_eq!(grid.tile(Position::new(0, idx)), Some(TileKind::Path));
                prop_assert_eq!(grid.tile(Position::new(idx, side - 1)), Some(TileKind::Path));
            }
        }

        #[test]
        fn test_border_path_is_walkable(side in MIN_SIDE..=MAX_SIDE, seed in any::<u64>()) {
            let grid = Grid::generate(side, &mut StdRng::seed_from_u64(seed));
            let path = grid.border_path();

            prop_assert_eq!(path.first().copied(), Some(Position::new(0, 0)));
            prop_assert_eq!(path.last().copied(), Some(Position::new(side - 1, side - 1)));
            prop_assert_eq!(path.len(), 2 * side - 1);
            for position in &path {
                prop_assert_eq!(grid.tile(*position), Some(TileKind::Path));
            }
            for pair in path.windows(2) {
                if let [from, to] = pair {
                    prop_assert_eq!(from.x.abs_diff(to.x) + from.y.abs_diff(to.y), 1);
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let first = Grid::generate(10, &mut StdRng::seed_from_u64(7));
        let second = Grid::generate(10, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second, "same seed should produce the same maze");
    }

    #[test]
    fn test_generate_places_interior_walls() {
        let grid = Grid::generate(MAX_SIDE, &mut StdRng::seed_from_u64(42));
        let walls = grid.walls().count();
        let interior = (MAX_SIDE - 1) * (MAX_SIDE - 1);

        assert!(walls > 0, "a large maze should contain walls");
        assert!(walls < interior, "a large maze should not be solid wall");
    }

    #[test]
    #[should_panic(expected = "maze side must be at least 2")]
    fn test_generate_rejects_tiny_side() {
        let _ = Grid::generate(1, &mut StdRng::seed_from_u64(0));
    }

    #[test]
    fn test_from_walls_carves_border() {
        let grid = Grid::from_walls(
            3,
            [
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(2, 2),
                Position::new(5, 5),
            ],
        );

        assert_eq!(grid.tile(Position::new(1, 1)), Some(TileKind::Wall));
        assert_eq!(grid.tile(Position::new(0, 1)), Some(TileKind::Path));
        assert_eq!(grid.tile(Position::new(2, 2)), Some(TileKind::Path));
        assert_eq!(grid.walls().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_tile_out_of_bounds() {
        let grid = Grid::from_walls(2, []);

        assert_eq!(grid.tile(Position::new(2, 0)), None);
        assert_eq!(grid.tile(Position::new(0, 2)), None);
        assert!(!grid.contains(Position::new(2, 2)));
        assert!(grid.contains(Position::new(1, 1)));
    }

    #[test]
    fn test_position_offset() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.offset(1, 0, 3), Some(Position::new(1, 0)));
        assert_eq!(origin.offset(-1, 0, 3), None);
        assert_eq!(origin.offset(0, -1, 3), None);
        assert_eq!(Position::new(2, 2).offset(1, 0, 3), None);
        assert_eq!(Position::new(2, 2).offset(0, 1, 3), None);
        assert_eq!(Position::new(2, 2).offset(-1, -1, 3), Some(Position::new(1, 1)));
    }
}
