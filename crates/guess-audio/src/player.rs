use std::collections::HashSet;
use std::path::Path;

use guess_core::{Notification, NotifySink};
use tracing::{debug, info, warn};

use crate::backend::{CueBackend, NullBackend, cue_path};

/// Plays a sound for each notification, best effort.
///
/// Load and playback failures are logged and swallowed; the game never
/// sees them.
pub struct CuePlayer {
    backend: Box<dyn CueBackend>,
    loaded: HashSet<Notification>,
}

impl CuePlayer {
    pub fn new(backend: Box<dyn CueBackend>) -> Self {
        Self {
            backend,
            loaded: HashSet::new(),
        }
    }

    /// A player that never makes a sound.
    pub fn silent() -> Self {
        Self::new(Box::new(NullBackend))
    }

    /// Load `<sound_dir>/<cue>.wav` for every cue. Missing or broken files
    /// only disable that cue.
    pub fn load_dir(&mut self, sound_dir: &Path) {
        for &cue in Notification::ALL {
            let path = cue_path(sound_dir, cue);
            match self.backend.load_cue(cue, &path) {
                Ok(()) => {
                    self.loaded.insert(cue);
                }
                Err(e) => {
                    self.loaded.remove(&cue);
                    warn!(%cue, path = %path.display(), "Cue unavailable: {e:#}");
                }
            }
        }
        info!(
            loaded = self.loaded.len(),
            total = Notification::ALL.len(),
            dir = %sound_dir.display(),
            "CuePlayer: loaded cues"
        );
    }

    pub fn is_loaded(&self, cue: Notification) -> bool {
        self.loaded.contains(&cue)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.backend.set_volume(volume);
    }
}

impl NotifySink for CuePlayer {
    fn notify(&mut self, notification: Notification) {
        if !self.loaded.contains(&notification) {
            debug!(cue = %notification, "Cue not loaded, skipping");
            return;
        }
        if let Err(e) = self.backend.play_cue(notification) {
            warn!(cue = %notification, "Failed to play cue: {e:#}");
        }
    }

    fn stop_all(&mut self) {
        self.backend.stop_all();
    }
}
