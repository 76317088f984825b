//! Core application state and logic for the memory maze game.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    cli::Config,
    events,
    session::{Difficulty, GameSession},
    types::{InputEvent, MainMenuItem, Screen},
    ui,
};

/// Application state container for the memory maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Validated run configuration.
    pub(crate) config: Config,
    /// Difficulty used by "Play" and by restarts without an active game.
    ///
    /// This starts at the configured difficulty and follows every preset the user picks.
    pub(crate) difficulty: Difficulty,
    /// Game being played, if any.
    ///
    /// This is only set while the in-game screen is shown. Leaving the game drops it.
    pub(crate) session: Option<GameSession>,
    /// Random source every maze is drawn from.
    pub(crate) rng: StdRng,
    /// Monotonic instant all session timestamps are measured from.
    pub(crate) epoch: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from a run configuration.
    ///
    /// The random source is seeded from the configuration when a seed was given and from the
    /// operating system otherwise.
    pub fn new(config: Config) -> Self {
        let rng = config
            .seed()
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Play),
            config,
            difficulty: config.difficulty(),
            session: None,
            rng,
            epoch: Instant::now(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws a frame, handles user input and advances the game clock, in that order.
    /// The loop continues until the exit condition is `true`, after which the function returns to
    /// the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - Rendering failures and invalid session settings
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        if self.config.play() {
            self.dispatch(InputEvent::SelectDifficulty(self.difficulty))?;
        }

        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
            self.tick();
        }

        Ok(())
    }

    /// Returns the current timestamp relative to the application epoch.
    pub(crate) fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Advances the clock of the active game.
    pub(crate) fn tick(&mut self) {
        let now = self.now();
        if let Some(session) = self.session.as_mut() {
            session.tick(now);
        }
    }

    /// Applies a logical input event.
    ///
    /// Moves go to the active game and are dropped when there is none. Selecting a difficulty
    /// always starts a fresh game, and restarting without an active game starts one at the current
    /// difficulty.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured settings are invalid for the preset.
    pub(crate) fn dispatch(&mut self, event: InputEvent) -> Result<()> {
        let now = self.now();

        match event {
            InputEvent::Move(direction) => {
                if let Some(session) = self.session.as_mut() {
                    session.apply_move(direction, now);
                }
            }
            InputEvent::SelectDifficulty(difficulty) => {
                let settings = self.config.settings(difficulty)?;
                info!(difficulty = difficulty.repr(), "starting game");

                self.difficulty = difficulty;
                self.session = Some(GameSession::new(settings, now, &mut self.rng));
                self.screen = Screen::InGame;
            }
            InputEvent::Restart => match self.session.as_mut() {
                Some(session) => session.restart(now, &mut self.rng),
                None => self.dispatch(InputEvent::SelectDifficulty(self.difficulty))?,
            },
        }

        Ok(())
    }

    /// Drops the active game and goes back to the main menu.
    pub(crate) fn leave_game(&mut self) {
        self.session = None;
        self.screen = Screen::MainMenu(MainMenuItem::Play);
    }
}
