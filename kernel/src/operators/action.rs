//! Primitive arm actions and their one-letter tokens.

use std::fmt;
use std::str::FromStr;

/// One primitive action of the robot arm. Every action costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Move the arm one column left.
    Left,
    /// Move the arm one column right.
    Right,
    /// Take the top object of the column under the arm.
    PickUp,
    /// Drop the held object onto the column under the arm.
    PutDown,
}

impl Action {
    /// All actions in successor-generation order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::PickUp, Self::PutDown];

    /// Plan token: `"l"`, `"r"`, `"p"` or `"d"`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::PickUp => "p",
            Self::PutDown => "d",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::PickUp => "pick-up",
            Self::PutDown => "put-down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text that is neither an action token nor an action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts tokens (`"p"`) and names (`"pick-up"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.token() == s || a.name() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}
