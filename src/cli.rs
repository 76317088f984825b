//! Command line interface and run configuration.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;

use crate::session::{Difficulty, Settings, DEFAULT_MEMORIZATION_WINDOW, STARTING_LIVES};

/// Command line arguments of the game.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Difficulty used when starting a game with "Play".
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Hard)]
    pub difficulty: DifficultyArg,
    /// How long the walls stay visible, in milliseconds.
    #[arg(short, long, default_value_t = 5000)]
    pub memorize_ms: u64,
    /// Lives at the start of every game.
    #[arg(short, long, default_value_t = STARTING_LIVES)]
    pub lives: u8,
    /// Seed for maze generation. The same seed replays the same sequence of mazes.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip the main menu and start playing right away.
    #[arg(long)]
    pub play: bool,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Difficulty preset as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// 5x5 grid.
    Easy,
    /// 7x7 grid.
    Medium,
    /// 10x10 grid.
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

impl Cli {
    /// Validates the arguments into a run configuration.
    ///
    /// # Errors
    ///
    /// This function returns an error if the number of lives is out of range.
    pub fn into_config(self) -> Result<Config> {
        let config = Config {
            difficulty: self.difficulty.into(),
            memorization_window: Duration::from_millis(self.memorize_ms),
            lives: self.lives,
            seed: self.seed,
            play: self.play,
        };
        let _ = config.settings(config.difficulty)?;

        Ok(config)
    }
}

/// Validated run configuration shared by every game of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Initial difficulty.
    difficulty: Difficulty,
    /// Memorization window for every preset.
    memorization_window: Duration,
    /// Starting lives for every preset.
    lives: u8,
    /// Seed for the maze generator, drawn from the OS when absent.
    seed: Option<u64>,
    /// Whether to skip the main menu.
    play: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            memorization_window: DEFAULT_MEMORIZATION_WINDOW,
            lives: STARTING_LIVES,
            seed: None,
            play: false,
        }
    }
}

impl Config {
    /// Returns a copy of the configuration with a fixed seed.
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Returns the initial difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the maze generator seed, if one was given.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether the main menu should be skipped.
    #[must_use]
    pub const fn play(&self) -> bool {
        self.play
    }

    /// Builds session settings for a difficulty preset.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured lives are out of range.
    pub fn settings(&self, difficulty: Difficulty) -> Result<Settings> {
        Settings::new(difficulty.side(), self.memorization_window, self.lives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = Cli::parse_from(["labyrintuine"])
            .into_config()
            .expect("default arguments should be valid");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::parse_from([
            "labyrintuine",
            "--difficulty",
            "easy",
            "--memorize-ms",
            "1500",
            "--lives",
            "5",
            "--seed",
            "99",
            "--play",
            "--log-file",
            "game.log",
        ]);

        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));

        let config = cli.into_config().expect("arguments should be valid");
        let settings = config
            .settings(config.difficulty())
            .expect("settings should be valid");

        assert_eq!(config.difficulty(), Difficulty::Easy);
        assert_eq!(config.seed(), Some(99));
        assert!(config.play(), "--play should skip the menu");
        assert_eq!(settings.side(), 5);
        assert_eq!(settings.memorization_window(), Duration::from_millis(1500));
        assert_eq!(settings.lives(), 5);
    }

    #[test]
    fn test_cli_rejects_zero_lives() {
        let result = Cli::parse_from(["labyrintuine", "--lives", "0"]).into_config();

        assert!(result.is_err(), "zero lives should be rejected");
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        let result = Cli::try_parse_from(["labyrintuine", "--difficulty", "nightmare"]);

        assert!(result.is_err(), "unknown presets should be rejected");
    }

    #[test]
    fn test_config_with_seed() {
        let config = Config::default().with_seed(4);

        assert_eq!(config.seed(), Some(4));
        assert_eq!(config.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory as _;

        Cli::command().debug_assert();
    }
}
