use std::fmt;

use thiserror::Error;

use crate::notify::Notification;

/// How a wrong guess missed the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Guess was below the secret.
    TooLow,
    /// Guess was above the secret.
    TooHigh,
    /// Guess was outside `[1, max_number]`.
    OutOfRange,
}

/// Result of a well-formed guess against an active round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    OutOfRange { guess: i32, max_number: i32 },
    TooLow { guess: i32 },
    TooHigh { guess: i32 },
    Correct { secret: i32, tries: u32 },
    /// The last allowed try was wrong. `last` records how it missed.
    ExhaustedTries { secret: i32, last: Miss },
}

impl GuessOutcome {
    /// Whether this outcome ends the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::ExhaustedTries { .. })
    }

    /// The miss behind a wrong guess, `None` for a correct one.
    pub fn miss(&self) -> Option<Miss> {
        match *self {
            Self::OutOfRange { .. } => Some(Miss::OutOfRange),
            Self::TooLow { .. } => Some(Miss::TooLow),
            Self::TooHigh { .. } => Some(Miss::TooHigh),
            Self::Correct { .. } => None,
            Self::ExhaustedTries { last, .. } => Some(last),
        }
    }

    /// Cue to emit for this outcome.
    ///
    /// In-range misses sound "incorrect" even when they also exhaust the
    /// round; out-of-range guesses are silent.
    pub fn notification(&self) -> Option<Notification> {
        match self.miss() {
            None => Some(Notification::Correct),
            Some(Miss::TooLow | Miss::TooHigh) => Some(Notification::Incorrect),
            Some(Miss::OutOfRange) => None,
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfRange { max_number, .. } => {
                write!(f, "Please enter a number between 1 and {max_number}.")
            }
            Self::TooLow { guess } => write!(f, "It's higher than {guess}. Try again."),
            Self::TooHigh { guess } => write!(f, "It's lower than {guess}. Try again."),
            Self::Correct { secret, tries } => write!(
                f,
                "Congratulations! You've guessed the number {secret} in {tries} tries."
            ),
            Self::ExhaustedTries { secret, .. } => write!(
                f,
                "You've used all your tries. The number was {secret}. Try again."
            ),
        }
    }
}

/// A guess that could not be evaluated. No try is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a valid number.")]
    InvalidFormat,
    #[error("Press Start Game to begin a new round.")]
    NotActive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_original_wording() {
        assert_eq!(
            GuessOutcome::OutOfRange {
                guess: 0,
                max_number: 50
            }
            .to_string(),
            "Please enter a number between 1 and 50."
        );
        assert_eq!(
            GuessOutcome::TooLow { guess: 3 }.to_string(),
            "It's higher than 3. Try again."
        );
        assert_eq!(
            GuessOutcome::TooHigh { guess: 10 }.to_string(),
            "It's lower than 10. Try again."
        );
        assert_eq!(
            GuessOutcome::Correct {
                secret: 7,
                tries: 3
            }
            .to_string(),
            "Congratulations! You've guessed the number 7 in 3 tries."
        );
        assert_eq!(
            GuessOutcome::ExhaustedTries {
                secret: 42,
                last: Miss::TooLow
            }
            .to_string(),
            "You've used all your tries. The number was 42. Try again."
        );
        assert_eq!(
            GuessError::InvalidFormat.to_string(),
            "Please enter a valid number."
        );
    }

    #[test]
    fn notification_mapping() {
        assert_eq!(
            GuessOutcome::TooLow { guess: 1 }.notification(),
            Some(Notification::Incorrect)
        );
        assert_eq!(
            GuessOutcome::TooHigh { guess: 9 }.notification(),
            Some(Notification::Incorrect)
        );
        assert_eq!(
            GuessOutcome::Correct {
                secret: 5,
                tries: 1
            }
            .notification(),
            Some(Notification::Correct)
        );
        assert_eq!(
            GuessOutcome::OutOfRange {
                guess: 999,
                max_number: 50
            }
            .notification(),
            None
        );
        assert_eq!(
            GuessOutcome::ExhaustedTries {
                secret: 5,
                last: Miss::TooHigh
            }
            .notification(),
            Some(Notification::Incorrect)
        );
        assert_eq!(
            GuessOutcome::ExhaustedTries {
                secret: 5,
                last: Miss::OutOfRange
            }
            .notification(),
            None
        );
    }

    #[test]
    fn terminal_outcomes() {
        assert!(
            GuessOutcome::Correct {
                secret: 1,
                tries: 1
            }
            .is_terminal()
        );
        assert!(
            GuessOutcome::ExhaustedTries {
                secret: 1,
                last: Miss::TooLow
            }
            .is_terminal()
        );
        assert!(!GuessOutcome::TooLow { guess: 1 }.is_terminal());
    }
}
