use tracing::{debug, info};

use crate::MIN_NUMBER;
use crate::difficulty::Difficulty;
use crate::outcome::{GuessError, GuessOutcome, Miss};
use crate::secret::{RandomSecret, SecretSource};

/// Where the session is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round: before the first start or after a reset.
    #[default]
    Idle,
    /// Accepting guesses.
    Active,
    Won,
    Lost,
}

/// Per-round data. Only exists outside `Idle`.
#[derive(Debug, Clone, Copy)]
struct Round {
    difficulty: Difficulty,
    secret: i32,
    tries_used: u32,
}

/// The whole game: current round plus the session's best score.
#[derive(Debug)]
pub struct GameSession<S = RandomSecret> {
    source: S,
    round: Option<Round>,
    state: GameState,
    best_score: Option<u32>,
}

impl GameSession<RandomSecret> {
    pub fn new() -> Self {
        Self::with_source(RandomSecret::from_entropy())
    }
}

impl Default for GameSession<RandomSecret> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SecretSource> GameSession<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            round: None,
            state: GameState::Idle,
            best_score: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Fewest tries over all won rounds, `None` until the first win.
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.map(|r| r.difficulty)
    }

    pub fn secret(&self) -> Option<i32> {
        self.round.map(|r| r.secret)
    }

    pub fn tries_used(&self) -> u32 {
        self.round.map_or(0, |r| r.tries_used)
    }

    pub fn max_number(&self) -> Option<i32> {
        self.difficulty().map(Difficulty::max_number)
    }

    pub fn max_tries(&self) -> Option<u32> {
        self.difficulty().map(Difficulty::max_tries)
    }

    pub fn tries_left(&self) -> Option<u32> {
        self.round
            .map(|r| r.difficulty.max_tries().saturating_sub(r.tries_used))
    }

    /// Begin a fresh round, discarding whatever round was in progress.
    pub fn start(&mut self, difficulty: Difficulty) {
        let secret = self.source.draw(difficulty.max_number());
        self.round = Some(Round {
            difficulty,
            secret,
            tries_used: 0,
        });
        self.state = GameState::Active;
        info!(%difficulty, "Round started");
    }

    /// Evaluate one guess.
    ///
    /// Input must be an optional sign followed by ASCII digits.
    ///
    /// A well-formed guess always consumes a try, even when it lies outside
    /// the range. Running out of tries turns the outcome into
    /// [`GuessOutcome::ExhaustedTries`].
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.state != GameState::Active {
            return Err(GuessError::NotActive);
        }
        let round = self.round.as_mut().ok_or(GuessError::NotActive)?;
        let guess: i32 = input.parse().map_err(|_| GuessError::InvalidFormat)?;

        round.tries_used += 1;
        let tries = round.tries_used;
        let max_number = round.difficulty.max_number();
        let max_tries = round.difficulty.max_tries();
        let secret = round.secret;

        let mut outcome = if !(MIN_NUMBER..=max_number).contains(&guess) {
            GuessOutcome::OutOfRange { guess, max_number }
        } else if guess < secret {
            GuessOutcome::TooLow { guess }
        } else if guess > secret {
            GuessOutcome::TooHigh { guess }
        } else {
            GuessOutcome::Correct { secret, tries }
        };
        debug!(guess, tries, ?outcome, "Guess evaluated");

        if let GuessOutcome::Correct { .. } = outcome {
            self.state = GameState::Won;
            if self.best_score.is_none_or(|best| tries < best) {
                self.best_score = Some(tries);
            }
            info!(tries, best = ?self.best_score, "Round won");
        } else if tries >= max_tries {
            let last = outcome.miss().unwrap_or(Miss::OutOfRange);
            outcome = GuessOutcome::ExhaustedTries { secret, last };
            self.state = GameState::Lost;
            info!(secret, tries, "Round lost");
        }

        Ok(outcome)
    }

    /// Abandon the round. The best score survives.
    pub fn reset(&mut self) {
        self.round = None;
        self.state = GameState::Idle;
        debug!("Session reset");
    }
}
