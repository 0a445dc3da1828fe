// Audio cues: backend trait, kira playback, best-effort cue player

pub mod backend;
pub mod kira_backend;
pub mod player;

pub use backend::{CueBackend, NullBackend, cue_path};
pub use kira_backend::KiraBackend;
pub use player::CuePlayer;
