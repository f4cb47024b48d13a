//! tictactoe - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Duration;
use tictactoe::{AppConfig, Cli, Session, SoundRegistry, default_player};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_cli(&cli);

    init_logging(config.log_file())?;
    info!(?config, "Starting tictactoe");

    let sounds = SoundRegistry::load(config.sounds());
    let notice = sounds.notice();
    let player = default_player(sounds, *config.sounds().enabled());

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(rng, player)
        .with_ai_mode(*config.ai_mode())
        .with_theme(*config.theme());
    if let Some(notice) = notice {
        session.notify(notice);
    }

    tictactoe::tui::run(session, Duration::from_millis(*config.ai_delay_ms())).await
}

/// Sends logs to a file so they stay out of the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
