use std::path::{Path, PathBuf};

use anyhow::Result;
use guess_core::Notification;

/// Sound file for a cue inside `sound_dir`, e.g. `sounds/correct.wav`.
pub fn cue_path(sound_dir: &Path, cue: Notification) -> PathBuf {
    sound_dir.join(format!("{}.wav", cue.name()))
}

/// Abstraction over audio backends.
/// Implementations: KiraBackend (real device), NullBackend (muted / no device).
pub trait CueBackend {
    /// Decode the file at `path` and keep it for `cue`.
    fn load_cue(&mut self, cue: Notification, path: &Path) -> Result<()>;

    /// Start playback of a loaded cue without waiting for it to finish.
    fn play_cue(&mut self, cue: Notification) -> Result<()>;

    /// Set volume (0.0..=1.0) for subsequent playback.
    fn set_volume(&mut self, volume: f32);

    fn stop_all(&mut self);
}

/// Backend that accepts everything and plays nothing.
#[derive(Debug, Default)]
pub struct NullBackend;

impl CueBackend for NullBackend {
    fn load_cue(&mut self, _cue: Notification, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn play_cue(&mut self, _cue: Notification) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn stop_all(&mut self) {}
}
