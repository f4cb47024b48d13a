//! Application configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and command-line flags.

use crate::cli::Cli;
use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Asset paths for the three sound cues.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Master switch for sound cues.
    enabled: bool,

    /// Played after a move that does not end the game.
    #[serde(rename = "move")]
    move_sound: PathBuf,

    /// Played when a player completes a line.
    win: PathBuf,

    /// Played when the board fills without a line.
    draw: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            move_sound: PathBuf::from("sounds/move.mp3"),
            win: PathBuf::from("sounds/win.wav"),
            draw: PathBuf::from("sounds/draw.wav"),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the computer playing O.
    ai_mode: bool,

    /// Delay before the AI answers, in milliseconds.
    ai_delay_ms: u64,

    /// Initial colour theme.
    theme: Theme,

    /// Fixed seed for the AI; random when absent.
    seed: Option<u64>,

    /// Log destination.
    log_file: PathBuf,

    /// Sound cue settings.
    sounds: SoundConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_mode: false,
            ai_delay_ms: 500,
            theme: Theme::default(),
            seed: None,
            log_file: PathBuf::from("tictactoe.log"),
            sounds: SoundConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present and defaults are used
    /// otherwise.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(theme = %config.theme, ai_mode = config.ai_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip_all)]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.ai {
            self.ai_mode = true;
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(delay) = cli.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.mute {
            self.sounds.enabled = false;
        }
        debug!(?self, "Applied command-line overrides");
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
