//! A terminal maze memorization game.
//!
//! A maze is shown for a few seconds, then its walls disappear and the player has to walk from the
//! top-left start to the bottom-right finish from memory. Every wall walked into costs a life and
//! stays visible from then on.
//!
//! The game logic lives in [`maze`], [`movement`], [`visibility`] and [`session`], and knows
//! nothing about the terminal. The [`App`] drives it from a Ratatui event loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
pub mod logging;
pub mod maze;
pub mod movement;
pub mod session;
mod types;
mod ui;
pub mod visibility;

pub use app::App;
pub use cli::{Cli, Config, DifficultyArg};
