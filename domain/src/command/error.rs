//! Command error types
//!
//! Both errors carry text meant for the person who typed the command and are
//! shown to them verbatim.

use thiserror::Error;

/// The raw command could not be split into words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Your command has an unmatched quote. Close every ' or \" and try again.")]
    UnbalancedQuotes,
}

/// A flag could not be parsed or a value failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any failure turning command text into validated criteria
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_displays_message_verbatim() {
        let err = ParseError::new("That season is not valid.");
        assert_eq!(err.to_string(), "That season is not valid.");
    }

    #[test]
    fn test_command_error_is_transparent() {
        let err: CommandError = ParseError::new("bad").into();
        assert_eq!(err.to_string(), "bad");
    }
}
