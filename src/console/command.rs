//! Operator command grammar.

use crate::domain::Expression;

/// A parsed operator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `1` or `blink` / `2` or `roar`.
    Broadcast(Expression),
    /// `status`.
    Status,
    /// `help`.
    Help,
    /// `quit` or `exit`.
    Quit,
    /// Anything else, holding the normalized input.
    Unknown(String),
}

impl Command {
    /// Parses one line. Surrounding whitespace and case are ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "blink" => Self::Broadcast(Expression::Blink),
            "2" | "roar" => Self::Broadcast(Expression::Roar),
            "status" => Self::Status,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(normalized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(Command::parse("1"), Command::Broadcast(Expression::Blink));
        assert_eq!(Command::parse("blink"), Command::Broadcast(Expression::Blink));
        assert_eq!(Command::parse("2"), Command::Broadcast(Expression::Roar));
        assert_eq!(Command::parse("roar"), Command::Broadcast(Expression::Roar));
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn trims_and_ignores_case() {
        assert_eq!(Command::parse("  ROAR \r\n"), Command::Broadcast(Expression::Roar));
        assert_eq!(Command::parse("Status"), Command::Status);
        assert_eq!(Command::parse("\tHELP"), Command::Help);
    }

    #[test]
    fn unknown_keeps_normalized_input() {
        assert_eq!(Command::parse(" Foo "), Command::Unknown("foo".to_string()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(Command::parse("3"), Command::Unknown("3".to_string()));
    }
}
