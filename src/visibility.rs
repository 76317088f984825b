//! Wall visibility state machine.
//!
//! Walls start out shown so the player can memorize them. They get hidden on the first of two
//! events: the memorization window running out, or the player issuing any move. Hiding is final
//! for the lifetime of a session.

use std::time::Duration;

use tracing::debug;

/// Whether the maze walls are currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Every wall is drawn.
    Revealed,
    /// Only walls the player collided with are drawn.
    Hidden,
}

/// Event that hid the walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HideTrigger {
    /// The memorization window ran out.
    WindowElapsed,
    /// The player issued a move.
    MoveInput,
}

/// One-way controller flipping walls from shown to hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "The controller is re-exported next to other session parts and needs a distinct name."
)]
pub struct VisibilityController {
    /// Current state. Only ever moves from revealed to hidden.
    state: Visibility,
    /// How long walls stay shown when the player does not move.
    window: Duration,
    /// Event that caused the transition, once it happened.
    trigger: Option<HideTrigger>,
}

impl VisibilityController {
    /// Creates a controller in the revealed state with the given memorization window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            state: Visibility::Revealed,
            window,
            trigger: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> Visibility {
        self.state
    }

    /// Returns the event that hid the walls, if they are hidden.
    #[must_use]
    pub const fn trigger(&self) -> Option<HideTrigger> {
        self.trigger
    }

    /// Returns the configured memorization window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Hides the walls once `elapsed` reaches the memorization window.
    ///
    /// Returns `true` only on the call that performs the transition.
    pub fn observe_time(&mut self, elapsed: Duration) -> bool {
        elapsed >= self.window && self.hide(HideTrigger::WindowElapsed)
    }

    /// Hides the walls because the player issued a move, legal or not.
    ///
    /// Returns `true` only on the call that performs the transition.
    pub fn observe_move(&mut self) -> bool {
        self.hide(HideTrigger::MoveInput)
    }

    /// Returns the memorization time left at `elapsed`.
    ///
    /// This is zero once the walls are hidden, whatever hid them.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        match self.state {
            Visibility::Revealed => self.window.saturating_sub(elapsed),
            Visibility::Hidden => Duration::ZERO,
        }
    }

    /// Performs the transition if it has not happened yet.
    fn hide(&mut self, trigger: HideTrigger) -> bool {
        if self.state == Visibility::Hidden {
            return false;
        }

        debug!(?trigger, "hiding maze walls");
        self.state = Visibility::Hidden;
        self.trigger = Some(trigger);

        true
    }
}
