// Game rules: difficulty presets, round state machine, outcomes, command dispatch

mod command;
mod difficulty;
mod notify;
mod outcome;
mod secret;
mod session;

pub use command::{Command, Response, dispatch};
pub use difficulty::{Difficulty, UnknownDifficulty};
pub use notify::{Notification, NotifySink};
pub use outcome::{GuessError, GuessOutcome, Miss};
pub use secret::{RandomSecret, SecretSource, SequenceSecret};
pub use session::{GameSession, GameState};

/// Smallest number the secret can take.
pub const MIN_NUMBER: i32 = 1;
