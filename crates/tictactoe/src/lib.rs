//! Terminal tic-tac-toe.
//!
//! Wraps the rules in [`tictactoe_core`] with what a playable game needs:
//! a [`Session`] that turns outcomes into sound cues and board resets, a
//! deferred [`AiScheduler`] for the random opponent, a static [`Theme`]
//! table, sound-cue handling, configuration, and the terminal UI in
//! [`tui`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod scheduler;
mod session;
mod sound;
mod theme;

pub mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, SoundConfig};
pub use scheduler::{AiScheduler, AppEvent};
pub use session::{AI_PLAYER, AiTicket, MoveReport, Session};
pub use sound::{
    MissingAsset, Muted, SoundCue, SoundPlayer, SoundRegistry, TerminalBell, default_player,
};
#[cfg(feature = "audio")]
pub use sound::{AudioUnavailable, Speaker};
pub use theme::{Palette, Rgb, Theme, UnknownTheme};
