//! Game session orchestration.
//!
//! This module ties the maze, movement and visibility pieces together into a single session that
//! owns all mutable game state. The terminal shell feeds it clock ticks and moves, then reads it
//! back through side-effect-free queries to draw the screen.

use std::time::Duration;

use color_eyre::eyre::{ensure, Result};
use rand::Rng;
use tracing::info;

use crate::{
    maze::{Grid, Position, TileKind, MAX_SIDE, MIN_SIDE},
    movement::{self, Direction, RevealedWalls},
    visibility::{Visibility, VisibilityController},
};

/// Lives a session starts with unless configured otherwise.
pub const STARTING_LIVES: u8 = 3;

/// Upper bound for the configurable number of lives.
pub const MAX_LIVES: u8 = 9;

/// Memorization window shared by every difficulty preset.
pub const DEFAULT_MEMORIZATION_WINDOW: Duration = Duration::from_millis(5000);

/// Difficulty presets, differing only in grid size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 5x5 grid.
    Easy,
    /// 7x7 grid.
    Medium,
    /// 10x10 grid.
    #[default]
    Hard,
}

impl Difficulty {
    /// Returns the grid side of the preset.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 10,
        }
    }

    /// Returns the display name of the preset.
    #[must_use]
    pub const fn repr(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Validated parameters a session is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Grid side.
    side: usize,
    /// How long walls stay shown before they hide on their own.
    memorization_window: Duration,
    /// Lives at the start of the session.
    lives: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(Difficulty::default())
    }
}

impl From<Difficulty> for Settings {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            side: difficulty.side(),
            memorization_window: DEFAULT_MEMORIZATION_WINDOW,
            lives: STARTING_LIVES,
        }
    }
}

impl Settings {
    /// Builds validated settings.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - `side` lies outside [`MIN_SIDE`]..=[`MAX_SIDE`]
    /// - `lives` is zero or above [`MAX_LIVES`]
    pub fn new(side: usize, memorization_window: Duration, lives: u8) -> Result<Self> {
        ensure!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "grid side must be between {MIN_SIDE} and {MAX_SIDE}, got {side}"
        );
        ensure!(
            (1..=MAX_LIVES).contains(&lives),
            "lives must be between 1 and {MAX_LIVES}, got {lives}"
        );

        Ok(Self {
            side,
            memorization_window,
            lives,
        })
    }

    /// Returns the grid side.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Returns the memorization window.
    #[must_use]
    pub const fn memorization_window(&self) -> Duration {
        self.memorization_window
    }

    /// Returns the starting lives.
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }
}

/// Outcome of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// The game is still being played.
    #[default]
    Ongoing,
    /// The player reached the finish.
    Won,
    /// The player ran out of lives.
    Lost,
}

/// How a tile should be drawn.
///
/// This is derived from the tile kind, the visibility state and the revealed walls, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileView {
    /// Drawn as open floor. Hidden walls look exactly like this.
    Path,
    /// Wall drawn while the walls are shown.
    Wall,
    /// Wall the player walked into after the walls were hidden.
    RevealedWall,
}

/// A single play-through of one maze.
///
/// The session exclusively owns the grid, the player and every counter. It only changes through
/// [`GameSession::tick`] and [`GameSession::apply_move`], and is replaced wholesale by
/// [`GameSession::reset`].
///
/// All timestamps are offsets from an epoch chosen by the caller, typically the moment the
/// application started. Only differences between them matter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "The name mirrors the role the type plays for the shell, which imports it unqualified."
)]
pub struct GameSession {
    /// Parameters the session was built from.
    settings: Settings,
    /// Maze being played.
    grid: Grid,
    /// Start tile, top-left corner.
    start: Position,
    /// Finish tile, bottom-right corner.
    finish: Position,
    /// Current player tile.
    player: Position,
    /// Lives left.
    lives: u8,
    /// Walls the player walked into.
    revealed: RevealedWalls,
    /// Wall visibility state machine.
    visibility: VisibilityController,
    /// Timestamp the session started at.
    started_at: Duration,
    /// Time elapsed since the start, frozen once the session ends.
    elapsed: Duration,
    /// Outcome of the session.
    terminal: TerminalState,
    /// Successful steps taken.
    steps: u32,
}

impl GameSession {
    /// Starts a new session on a freshly generated maze.
    pub fn new<R: Rng + ?Sized>(settings: Settings, now: Duration, rng: &mut R) -> Self {
        Self::with_grid(settings, Grid::generate(settings.side, rng), now)
    }

    /// Starts a new session on an existing maze.
    ///
    /// The grid side takes precedence over the one stored in `settings`.
    #[must_use]
    pub fn with_grid(settings: Settings, grid: Grid, now: Duration) -> Self {
        let last = grid.side() - 1;
        let settings = Settings {
            side: grid.side(),
            ..settings
        };
        info!(
            side = settings.side,
            window_ms = settings.memorization_window.as_millis(),
            lives = settings.lives,
            walls = grid.walls().count(),
            "starting session"
        );

        Self {
            settings,
            grid,
            start: Position::new(0, 0),
            finish: Position::new(last, last),
            player: Position::new(0, 0),
            lives: settings.lives,
            revealed: RevealedWalls::new(),
            visibility: VisibilityController::new(settings.memorization_window),
            started_at: now,
            elapsed: Duration::ZERO,
            terminal: TerminalState::Ongoing,
            steps: 0,
        }
    }

    /// Replaces the whole session with a new one built from `settings`.
    pub fn reset<R: Rng + ?Sized>(&mut self, settings: Settings, now: Duration, rng: &mut R) {
        *self = Self::new(settings, now, rng);
    }

    /// Replaces the whole session with a new maze under the same settings.
    pub fn restart<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) {
        self.reset(self.settings, now, rng);
    }

    /// Advances the session clock and lets the walls hide once the window runs out.
    ///
    /// Does nothing once the session has ended, which keeps the elapsed time frozen.
    pub fn tick(&mut self, now: Duration) {
        if self.terminal != TerminalState::Ongoing {
            return;
        }

        self.elapsed = now.saturating_sub(self.started_at);
        let _ = self.visibility.observe_time(self.elapsed);
    }

    /// Applies one player move.
    ///
    /// The move hides the walls before it is resolved, whether it ends up legal, blocked or off the
    /// grid. Running out of lives takes precedence over reaching the finish. Does nothing once the
    /// session has ended.
    pub fn apply_move(&mut self, direction: Direction, now: Duration) {
        if self.terminal != TerminalState::Ongoing {
            return;
        }

        self.tick(now);
        let _ = self.visibility.observe_move();

        let outcome = movement::resolve(
            &self.grid,
            self.player,
            direction,
            self.lives,
            &mut self.revealed,
        );
        if outcome.position != self.player {
            self.steps = self.steps.saturating_add(1);
        }
        self.player = outcome.position;
        self.lives = outcome.lives;

        if self.lives == 0 {
            self.finish_with(TerminalState::Lost, now);
        } else if self.player == self.finish {
            self.finish_with(TerminalState::Won, now);
        }
    }

    /// Records the outcome and freezes the clock.
    fn finish_with(&mut self, terminal: TerminalState, now: Duration) {
        self.elapsed = now.saturating_sub(self.started_at);
        self.terminal = terminal;
        info!(
            ?terminal,
            elapsed_ms = self.elapsed.as_millis(),
            steps = self.steps,
            lives = self.lives,
            "session over"
        );
    }

    /// Returns how the tile at `position` should be drawn, or `None` outside the grid.
    #[must_use]
    pub fn tile_view(&self, position: Position) -> Option<TileView> {
        let view = match (self.grid.tile(position)?, self.visibility.state()) {
            (TileKind::Path, _) => TileView::Path,
            (TileKind::Wall, Visibility::Revealed) => TileView::Wall,
            (TileKind::Wall, Visibility::Hidden) if self.revealed.contains(&position) => {
                TileView::RevealedWall
            }
            (TileKind::Wall, Visibility::Hidden) => TileView::Path,
        };

        Some(view)
    }

    /// Returns the settings the session was built from.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns the grid side.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.grid.side()
    }

    /// Returns the player position.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the start position.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the finish position.
    #[must_use]
    pub const fn finish(&self) -> Position {
        self.finish
    }

    /// Returns the lives left.
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Returns the successful steps taken so far.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Returns the walls the player has walked into.
    #[must_use]
    pub const fn revealed_walls(&self) -> &RevealedWalls {
        &self.revealed
    }

    /// Returns the elapsed time, as of the last tick or frozen at the outcome.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the memorization time left, zero once the walls are hidden.
    #[must_use]
    pub fn remaining_memorization(&self) -> Duration {
        self.visibility.remaining(self.elapsed)
    }

    /// Returns whether walls are currently shown.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    /// Returns the outcome of the session.
    #[must_use]
    pub const fn terminal(&self) -> TerminalState {
        self.terminal
    }
}
