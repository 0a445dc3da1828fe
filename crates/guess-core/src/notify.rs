use std::fmt;

/// Fire-and-forget event the presentation layer may turn into a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Start,
    Incorrect,
    Correct,
    Reset,
}

impl Notification {
    pub const ALL: &[Notification] = &[
        Notification::Start,
        Notification::Incorrect,
        Notification::Correct,
        Notification::Reset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Incorrect => "incorrect",
            Self::Correct => "correct",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receiver of notifications. Implementations must not fail loudly:
/// whatever happens inside `notify` stays there.
pub trait NotifySink {
    fn notify(&mut self, notification: Notification);

    /// Cut off anything still playing from earlier notifications.
    fn stop_all(&mut self) {}
}

/// Records notifications in order.
impl NotifySink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        let names: Vec<_> = Notification::ALL.iter().map(|n| n.name()).collect();
        assert_eq!(names, ["start", "incorrect", "correct", "reset"]);
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::Start);
        sink.notify(Notification::Reset);
        assert_eq!(sink, [Notification::Start, Notification::Reset]);
    }
}
