//! Tests for configuration loading and command-line overrides.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::{AppConfig, Cli, Theme};

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert!(!config.ai_mode());
    assert_eq!(*config.ai_delay_ms(), 500);
    assert_eq!(*config.theme(), Theme::Classic);
    assert_eq!(*config.seed(), None);
    assert!(*config.sounds().enabled());
    assert_eq!(config.sounds().move_sound(), &PathBuf::from("sounds/move.mp3"));
    assert_eq!(config.sounds().win(), &PathBuf::from("sounds/win.wav"));
    assert_eq!(config.sounds().draw(), &PathBuf::from("sounds/draw.wav"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = AppConfig::from_toml(
        r#"
        theme = "futuristic"
        ai_mode = true

        [sounds]
        move = "assets/click.ogg"
        "#,
    )
    .expect("valid config");

    assert_eq!(*config.theme(), Theme::Futuristic);
    assert!(*config.ai_mode());
    assert_eq!(*config.ai_delay_ms(), 500);
    assert_eq!(config.sounds().move_sound(), &PathBuf::from("assets/click.ogg"));
    assert_eq!(config.sounds().win(), &PathBuf::from("sounds/win.wav"));
}

#[test]
fn test_unknown_theme_is_rejected() {
    let err = AppConfig::from_toml(r#"theme = "neon""#).expect_err("bad theme");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tictactoe.toml");
    std::fs::write(&path, "ai_delay_ms = 50\nseed = 9\n").expect("write config");

    let config = AppConfig::load(Some(&path)).expect("config loads");

    assert_eq!(*config.ai_delay_ms(), 50);
    assert_eq!(*config.seed(), Some(9));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let config = AppConfig::from_toml("theme = \"nature\"\nai_delay_ms = 900\n").expect("valid config");
    let cli = Cli::parse_from([
        "tictactoe",
        "--ai",
        "--theme",
        "Futuristic",
        "--ai-delay-ms",
        "10",
        "--seed",
        "4",
        "--mute",
        "--log-file",
        "game.log",
    ]);

    let config = config.with_cli(&cli);

    assert!(*config.ai_mode());
    assert_eq!(*config.theme(), Theme::Futuristic);
    assert_eq!(*config.ai_delay_ms(), 10);
    assert_eq!(*config.seed(), Some(4));
    assert!(!*config.sounds().enabled());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_no_flags_change_nothing() {
    let config = AppConfig::from_toml("theme = \"nature\"\n").expect("valid config");
    let cli = Cli::parse_from(["tictactoe"]);
    assert_eq!(config.clone().with_cli(&cli), config);
}

#[test]
fn test_cli_rejects_unknown_theme() {
    let result = Cli::try_parse_from(["tictactoe", "--theme", "neon"]);
    assert!(result.is_err());
}
