//! Kira-based cue playback.
//!
//! Each cue is decoded once into StaticSoundData and cloned per play.
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, anyhow};
use guess_core::Notification;
use kira::manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend};
use kira::sound::PlaybackState;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::tween::Tween;
use tracing::debug;

use crate::backend::CueBackend;

pub struct KiraBackend {
    manager: AudioManager,
    sounds: HashMap<Notification, StaticSoundData>,
    /// Handles of sounds started so far; finished ones are pruned on play.
    handles: Vec<StaticSoundHandle>,
    volume: f32,
}

impl KiraBackend {
    /// Open the default output device.
    pub fn new() -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            handles: Vec::new(),
            volume: 1.0,
        })
    }
}

impl CueBackend for KiraBackend {
    fn load_cue(&mut self, cue: Notification, path: &Path) -> Result<()> {
        let data = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load sound {}: {e}", path.display()))?;
        self.sounds.insert(cue, data);
        debug!(%cue, path = %path.display(), "Loaded cue");
        Ok(())
    }

    fn play_cue(&mut self, cue: Notification) -> Result<()> {
        let data = self
            .sounds
            .get(&cue)
            .ok_or_else(|| anyhow!("Cue not loaded: {cue}"))?
            .clone()
            .volume(self.volume as f64);
        let handle = self
            .manager
            .play(data)
            .map_err(|e| anyhow!("Failed to play cue {cue}: {e}"))?;
        self.handles.retain(|h| h.state() != PlaybackState::Stopped);
        self.handles.push(handle);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn stop_all(&mut self) {
        for mut handle in self.handles.drain(..) {
            handle.stop(Tween::default());
        }
    }
}
