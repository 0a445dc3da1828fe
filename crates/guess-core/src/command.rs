use crate::difficulty::Difficulty;
use crate::notify::{Notification, NotifySink};
use crate::outcome::{GuessError, GuessOutcome};
use crate::secret::SecretSource;
use crate::session::GameSession;

/// A user action forwarded from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Difficulty),
    Guess(String),
    Reset,
}

/// What the presentation layer needs to render after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Started { max_number: i32, max_tries: u32 },
    Guessed(Result<GuessOutcome, GuessError>),
    Reset,
}

impl Response {
    /// Message for the result label. Empty after a reset.
    pub fn message(&self) -> String {
        match self {
            Self::Started {
                max_number,
                max_tries,
            } => format!(
                "I have selected a number between 1 and {max_number}.\nYou have {max_tries} tries to guess it!"
            ),
            Self::Guessed(Ok(outcome)) => outcome.to_string(),
            Self::Guessed(Err(err)) => err.to_string(),
            Self::Reset => String::new(),
        }
    }
}

/// Apply `command` to the session and emit the matching notification.
pub fn dispatch<S: SecretSource>(
    session: &mut GameSession<S>,
    command: Command,
    sink: &mut dyn NotifySink,
) -> Response {
    match command {
        Command::Start(difficulty) => {
            session.start(difficulty);
            sink.stop_all();
            sink.notify(Notification::Start);
            Response::Started {
                max_number: difficulty.max_number(),
                max_tries: difficulty.max_tries(),
            }
        }
        Command::Guess(input) => {
            let result = session.guess(&input);
            if let Some(notification) = result.as_ref().ok().and_then(GuessOutcome::notification) {
                sink.notify(notification);
            }
            Response::Guessed(result)
        }
        Command::Reset => {
            session.reset();
            sink.stop_all();
            sink.notify(Notification::Reset);
            Response::Reset
        }
    }
}
