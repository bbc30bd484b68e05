//! Wire payloads pushed to connected displays.

use std::fmt;

/// One of the two expressions a display can be told to play.
///
/// Each variant is sent as a single literal UTF-8 text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Eye blink animation, also used as the greeting on connect.
    Blink,
    /// Roar animation.
    Roar,
}

impl Expression {
    /// Returns the exact text frame payload for this expression.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::Roar => "roar",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
