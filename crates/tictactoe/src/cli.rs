//! Command-line interface for tictactoe.

use crate::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with themes, scores and a random AI opponent
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start in AI mode (you play X, the computer plays O)
    #[arg(long)]
    pub ai: bool,

    /// Initial theme: classic, futuristic or nature
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Delay before the AI answers, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Seed for the AI's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,

    /// Where to write logs (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
