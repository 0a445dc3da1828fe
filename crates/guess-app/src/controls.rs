use guess_core::GameState;

/// Which controls accept input in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    /// Guess field and Guess button.
    pub guess: bool,
    pub reset: bool,
}

impl Controls {
    pub fn for_state(state: GameState) -> Self {
        Self {
            start: true,
            guess: state == GameState::Active,
            reset: state != GameState::Idle,
        }
    }
}

/// Best score readout, `High Score: -` before the first win.
pub fn high_score_label(best: Option<u32>) -> String {
    match best {
        Some(tries) => format!("High Score: {tries}"),
        None => "High Score: -".to_string(),
    }
}
