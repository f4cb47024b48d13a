//! Sound cues for move, win and draw events.
//!
//! Sound is best-effort. Every asset is opened and decoded once, when the
//! registry is loaded; a missing or undecodable file only mutes the affected
//! cue, and playing never fails the game.
//!
//! Decoded clips go to the speakers through `Speaker` when the crate is
//! built with the `audio` feature and an output device opens. Otherwise
//! [`TerminalBell`] stands in with a different bell pattern per cue.

use crate::config::SoundConfig;
use derive_more::{Display, Error};
use rodio::source::Buffered;
use rodio::{Decoder, Source};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// A decoded asset, cheap to clone and replay.
type Clip = Buffered<Decoder<BufReader<File>>>;

/// The three events that make a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SoundCue {
    /// A move that does not end the game.
    #[display("move")]
    Move,
    /// A completed line.
    #[display("win")]
    Win,
    /// A full board without a line.
    #[display("draw")]
    Draw,
}

/// A configured asset that could not be opened or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Sound asset for '{}' unusable at {}: {}", cue, path.display(), reason)]
pub struct MissingAsset {
    /// The cue that will stay silent.
    pub cue: SoundCue,
    /// Where the asset was expected.
    pub path: PathBuf,
    /// Why it could not be used.
    pub reason: String,
}

/// Cue-to-clip table, immutable after [`load`](Self::load).
#[derive(Clone, Default)]
pub struct SoundRegistry {
    clips: HashMap<SoundCue, Clip>,
    missing: Vec<MissingAsset>,
}

impl std::fmt::Debug for SoundRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundRegistry")
            .field("loaded", &self.clips.keys().collect::<Vec<_>>())
            .field("missing", &self.missing)
            .finish()
    }
}

impl SoundRegistry {
    /// Opens and decodes every configured asset.
    ///
    /// Each unusable file is logged once here and recorded in
    /// [`missing`](Self::missing). A disabled config yields an empty
    /// registry.
    #[instrument(skip(config), fields(enabled = *config.enabled()))]
    pub fn load(config: &SoundConfig) -> Self {
        let mut registry = Self::default();
        if !config.enabled() {
            info!("Sound disabled");
            return registry;
        }

        let configured = [
            (SoundCue::Move, config.move_sound()),
            (SoundCue::Win, config.win()),
            (SoundCue::Draw, config.draw()),
        ];
        for (cue, path) in configured {
            match decode(path) {
                Ok(clip) => {
                    debug!(%cue, path = %path.display(), "Sound asset decoded");
                    registry.clips.insert(cue, clip);
                }
                Err(reason) => {
                    let missing = MissingAsset {
                        cue,
                        path: path.clone(),
                        reason,
                    };
                    warn!(error = %missing, "Sound cue will be silent");
                    registry.missing.push(missing);
                }
            }
        }
        registry
    }

    /// True if the cue has a decoded clip.
    pub fn is_loaded(&self, cue: SoundCue) -> bool {
        self.clips.contains_key(&cue)
    }

    /// Assets that were configured but could not be used.
    pub fn missing(&self) -> &[MissingAsset] {
        &self.missing
    }

    /// One-line notice for the player, or `None` when nothing is missing.
    pub fn notice(&self) -> Option<String> {
        if self.missing.is_empty() {
            return None;
        }
        let cues: Vec<String> = self.missing.iter().map(|m| m.cue.to_string()).collect();
        Some(format!("Sound unavailable for: {}", cues.join(", ")))
    }
}

fn decode(path: &Path) -> Result<Clip, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| e.to_string())?;
    Ok(decoder.buffered())
}

/// Something that can play a cue.
pub trait SoundPlayer {
    /// Plays `cue`. Failures are logged, never returned.
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, cue: SoundCue) {
        debug!(%cue, "Muted");
    }
}

/// The default audio output could not be opened.
#[cfg(feature = "audio")]
#[derive(Debug, Clone, Display, Error)]
#[display("Audio output unavailable: {}", message)]
pub struct AudioUnavailable {
    /// Device error text.
    pub message: String,
}

/// Plays decoded clips on the default output device.
#[cfg(feature = "audio")]
pub struct Speaker {
    stream: rodio::OutputStream,
    registry: SoundRegistry,
}

#[cfg(feature = "audio")]
impl Speaker {
    /// Opens the default output device.
    #[instrument(skip(registry))]
    pub fn open(registry: &SoundRegistry) -> Result<Self, AudioUnavailable> {
        let stream = rodio::OutputStreamBuilder::open_default_stream().map_err(|e| {
            AudioUnavailable {
                message: e.to_string(),
            }
        })?;
        info!("Audio output opened");
        Ok(Self {
            stream,
            registry: registry.clone(),
        })
    }
}

#[cfg(feature = "audio")]
impl SoundPlayer for Speaker {
    fn play(&mut self, cue: SoundCue) {
        if let Some(clip) = self.registry.clips.get(&cue) {
            self.stream.mixer().add(clip.clone());
        }
    }
}

/// Rings the terminal bell for every cue whose asset decoded.
///
/// Move rings once, draw twice, win three times.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    registry: SoundRegistry,
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell player writing to `out`.
    pub fn new(registry: SoundRegistry, out: W) -> Self {
        Self { registry, out }
    }

    /// Consumes the player, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn pattern(cue: SoundCue) -> &'static [u8] {
        match cue {
            SoundCue::Move => b"\x07",
            SoundCue::Draw => b"\x07\x07",
            SoundCue::Win => b"\x07\x07\x07",
        }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        if !self.registry.is_loaded(cue) {
            return;
        }
        let pattern = Self::pattern(cue);
        if let Err(e) = self.out.write_all(pattern).and_then(|()| self.out.flush()) {
            warn!(%cue, error = %e, "Failed to play sound");
        }
    }
}

/// Picks the best available player: speakers, then the bell, or silence
/// when sound is disabled.
#[instrument(skip(registry))]
pub fn default_player(registry: SoundRegistry, enabled: bool) -> Box<dyn SoundPlayer> {
    if !enabled {
        return Box::new(Muted);
    }
    #[cfg(feature = "audio")]
    match Speaker::open(&registry) {
        Ok(speaker) => return Box::new(speaker),
        Err(e) => warn!(error = %e, "Falling back to the terminal bell"),
    }
    Box::new(TerminalBell::new(registry, std::io::stdout()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// A short mono 16-bit PCM WAV of silence.
    fn wav_bytes() -> Vec<u8> {
        let samples = [0i16; 64];
        let data_len = (samples.len() * 2) as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&16000u32.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            out.extend_from_slice(&sample.to_le_bytes());
        }
        out
    }

    /// Config pointing at `move.wav`, `win.wav` and `draw.wav` in `dir`.
    /// Names in `playable` get a valid WAV, names in `garbage` get junk
    /// bytes, the rest do not exist.
    fn config_in(dir: &Path, playable: &[&str], garbage: &[&str]) -> SoundConfig {
        for name in playable {
            fs::write(dir.join(name), wav_bytes()).expect("write asset");
        }
        for name in garbage {
            fs::write(dir.join(name), b"not audio").expect("write asset");
        }
        let text = format!(
            "enabled = true\nmove = {:?}\nwin = {:?}\ndraw = {:?}\n",
            dir.join("move.wav"),
            dir.join("win.wav"),
            dir.join("draw.wav"),
        );
        toml::from_str(&text).expect("sound config")
    }

    #[test]
    fn test_missing_assets_are_reported_and_muted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SoundRegistry::load(&config_in(dir.path(), &["win.wav"], &[]));

        assert!(registry.is_loaded(SoundCue::Win));
        assert!(!registry.is_loaded(SoundCue::Move));
        assert!(!registry.is_loaded(SoundCue::Draw));
        assert_eq!(registry.missing().len(), 2);
        assert_eq!(
            registry.notice().as_deref(),
            Some("Sound unavailable for: move, draw")
        );
    }

    #[test]
    fn test_undecodable_assets_are_reported_and_muted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SoundRegistry::load(&config_in(
            dir.path(),
            &[],
            &["move.wav", "win.wav", "draw.wav"],
        ));

        assert!(!registry.is_loaded(SoundCue::Move));
        assert!(!registry.is_loaded(SoundCue::Win));
        assert!(!registry.is_loaded(SoundCue::Draw));
        assert_eq!(registry.missing().len(), 3);
        assert!(registry.missing().iter().all(|m| !m.reason.is_empty()));

        let mut bell = TerminalBell::new(registry, Vec::new());
        bell.play(SoundCue::Move);
        bell.play(SoundCue::Win);
        assert!(bell.into_inner().is_empty());
    }

    #[test]
    fn test_decoded_clip_has_samples() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SoundRegistry::load(&config_in(
            dir.path(),
            &["move.wav", "win.wav", "draw.wav"],
            &[],
        ));
        assert!(registry.missing().is_empty());
        assert_eq!(registry.notice(), None);

        let clip = registry.clips.get(&SoundCue::Win).expect("win clip").clone();
        assert!(clip.count() > 0);
    }

    #[test]
    fn test_bell_patterns_tell_cues_apart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SoundRegistry::load(&config_in(
            dir.path(),
            &["move.wav", "win.wav", "draw.wav"],
            &[],
        ));

        let mut outputs = Vec::new();
        for cue in [SoundCue::Move, SoundCue::Win, SoundCue::Draw] {
            let mut bell = TerminalBell::new(registry.clone(), Vec::new());
            bell.play(cue);
            outputs.push(bell.into_inner());
        }

        assert_eq!(outputs[0], b"\x07".to_vec());
        assert_eq!(outputs[1], b"\x07\x07\x07".to_vec());
        assert_eq!(outputs[2], b"\x07\x07".to_vec());
    }

    #[test]
    fn test_bell_only_rings_for_loaded_cues() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SoundRegistry::load(&config_in(dir.path(), &["win.wav"], &["draw.wav"]));
        let mut bell = TerminalBell::new(registry, Vec::new());

        bell.play(SoundCue::Move);
        bell.play(SoundCue::Win);
        bell.play(SoundCue::Draw);

        assert_eq!(bell.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_disabled_config_loads_nothing() {
        let config: SoundConfig = toml::from_str("enabled = false").expect("sound config");
        let registry = SoundRegistry::load(&config);
        assert!(registry.missing().is_empty());
        assert!(!registry.is_loaded(SoundCue::Move));
    }
}
