use std::fmt;

/// Classified uevent verb.
///
/// Only `add` and `remove` are told apart; every other token, including
/// `change`, `bind` and differently cased spellings, is [`Action::Unknown`].
/// The raw token stays available through [`crate::Uevent::action_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Remove,
    Unknown,
}

impl Action {
    pub fn new(token: &[u8]) -> Self {
        match token {
            b"add" => Self::Add,
            b"remove" => Self::Remove,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
