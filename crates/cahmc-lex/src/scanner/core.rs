//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its main classification
//! loop, and whitespace handling. The per-family scanning methods live
//! in the sibling modules.

use cahmc_util::{FileId, LexError, LexResult, Location};

use crate::cursor::Cursor;
use crate::tables::LexicalTables;
use crate::token::{SpecialKind, Token};

/// The scanner for Cahmann Script source text.
///
/// One scanner instance performs a single pass over one
/// (comment-stripped) buffer and produces the complete token sequence,
/// terminated by exactly one end-of-file token. A lexical error aborts
/// the pass; no partial sequence is returned.
///
/// Scanning is strictly sequential; the cursor and the in-progress
/// token vector are exclusively owned by the scanner, so different
/// buffers may be scanned in parallel without any shared state.
///
/// # Example
///
/// ```
/// use cahmc_lex::Scanner;
/// use cahmc_util::FileId;
///
/// let tokens = Scanner::new("x = 1".to_string(), FileId::DUMMY)
///     .scan()
///     .unwrap();
/// assert_eq!(tokens.len(), 4); // x, =, 1, end-of-file
/// ```
pub struct Scanner {
    /// Character cursor over the stripped source.
    pub(crate) cursor: Cursor,

    /// Keyword and operator tables, built once at construction.
    pub(crate) tables: LexicalTables,

    /// The buffer's opaque handle, copied into every token.
    pub(crate) file: FileId,

    /// Tokens produced so far.
    pub(crate) tokens: Vec<Token>,

    /// Line where the current token starts (1-based).
    token_line: u32,

    /// Column where the current token starts (1-based).
    token_column: u32,
}

impl Scanner {
    /// Creates a scanner over comment-stripped source text.
    ///
    /// Callers that start from raw text should use [`crate::tokenize`],
    /// which runs the comment stripper first.
    pub fn new(source: String, file: FileId) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables: LexicalTables::new(),
            file,
            tokens: Vec::new(),
            token_line: 1,
            token_column: 1,
        }
    }

    /// Runs the classification loop to completion.
    ///
    /// Returns the ordered token sequence, whose last element is always
    /// the end-of-file token, or the first lexical error encountered.
    pub fn scan(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.skip_whitespace();

            // Token location is the first character of the lexeme,
            // captured before any lookahead consumption.
            self.token_line = self.cursor.line();
            self.token_column = self.cursor.column();

            let Some(c) = self.cursor.peek() else { break };

            if self.scan_operator() {
                continue;
            }
            if c.is_ascii_alphabetic() || c == '_' {
                self.scan_identifier();
                continue;
            }
            if c.is_ascii_digit() {
                self.scan_number()?;
                continue;
            }
            if c == '"' {
                self.scan_string()?;
                continue;
            }

            return Err(LexError::UnrecognizedCharacter {
                character: c,
                location: self.token_location(),
            });
        }

        self.tokens.push(Token::Special {
            kind: SpecialKind::EndOfFile,
            location: Location::sentinel(self.file),
        });
        Ok(self.tokens)
    }

    /// Consumes a run of space, tab, carriage-return, and newline
    /// characters. Produces no token.
    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.cursor.read();
        }
    }

    /// Returns the location where the current token started.
    pub(crate) fn token_location(&self) -> Location {
        Location::new(self.file, self.token_line, self.token_column)
    }

    /// Returns the current cursor position as a location.
    pub(crate) fn cursor_location(&self) -> Location {
        Location::new(self.file, self.cursor.line(), self.cursor.column())
    }
}
