//! Lexical error types.
//!
//! Every error carries the [`Location`] of the offending text so the
//! caller can format a precise diagnostic. The lexer itself never
//! prints anything; it only returns structured error data.

use thiserror::Error;

use crate::location::Location;

/// Error raised while stripping comments or scanning tokens.
///
/// A lexical error aborts the current buffer's scan immediately; no
/// partial token sequence is handed to the parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A block comment opener without a matching closer.
    #[error("unterminated block comment (opened with '{opener}') at {location}")]
    UnterminatedBlockComment {
        /// The opening delimiter, `/*` or `--[[`.
        opener: String,
        /// Position of the opening delimiter.
        location: Location,
    },

    /// A character that starts no whitespace run, operator, identifier,
    /// or literal.
    #[error("unrecognized character '{character}' at {location}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Position of the character.
        location: Location,
    },

    /// A string literal whose closing quote was never found on the
    /// opening line.
    #[error("unterminated string literal at {location}")]
    UnterminatedStringLiteral {
        /// Position of the opening quote.
        location: Location,
    },

    /// An escape sequence the string grammar does not define.
    #[error("invalid escape sequence '\\{escape}' at {location}")]
    InvalidEscape {
        /// The character following the backslash.
        escape: char,
        /// Position of the escape character.
        location: Location,
    },

    /// A numeric literal that could not be parsed.
    ///
    /// Not produced by the current number grammar, whose digit shapes
    /// always parse; reserved for richer literal forms.
    #[error("malformed number literal '{lexeme}' at {location}")]
    MalformedNumber {
        /// The consumed numeric text.
        lexeme: String,
        /// Position of the first digit.
        location: Location,
    },
}

impl LexError {
    /// Returns the source position the error refers to.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnterminatedBlockComment { location, .. }
            | LexError::UnrecognizedCharacter { location, .. }
            | LexError::UnterminatedStringLiteral { location }
            | LexError::InvalidEscape { location, .. }
            | LexError::MalformedNumber { location, .. } => *location,
        }
    }
}

/// Result type alias for lexical operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
