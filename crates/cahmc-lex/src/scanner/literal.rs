//! Number and string literal scanning.
//!
//! The literal grammar is deliberately small: decimal numbers with an
//! optional fraction, and double-quoted strings with a handful of
//! escape sequences. The token records both the raw lexeme and the
//! decoded value.

use cahmc_util::{LexError, LexResult};

use crate::token::{LiteralValue, Token};
use crate::Scanner;

impl Scanner {
    /// Scans a numeric literal: `[0-9]+(\.[0-9]+)?`.
    ///
    /// The dot is consumed only when a digit follows, so `1.` is the
    /// number `1` followed by a member-access operator.
    pub(crate) fn scan_number(&mut self) -> LexResult<()> {
        let mut lexeme = String::new();

        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.cursor.read();
            } else {
                break;
            }
        }

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_at(1).is_some_and(|c| c.is_ascii_digit())
        {
            lexeme.push('.');
            self.cursor.read();
            while let Some(c) = self.cursor.peek() {
                if c.is_ascii_digit() {
                    lexeme.push(c);
                    self.cursor.read();
                } else {
                    break;
                }
            }
        }

        let location = self.token_location();
        // Invariant: the collected shape is always valid f64 input
        // (overflow rounds to infinity, it does not error). The error
        // arm exists for richer literal forms, not for this grammar.
        let value = lexeme
            .parse::<f64>()
            .map_err(|_| LexError::MalformedNumber {
                lexeme: lexeme.clone(),
                location,
            })?;

        self.tokens.push(Token::Literal {
            value: LiteralValue::Number(value),
            lexeme,
            location,
        });
        Ok(())
    }

    /// Scans a double-quoted string literal.
    ///
    /// Escapes `\n`, `\t`, `\r`, `\\`, `\"`, and `\0` are decoded into
    /// the value; the lexeme keeps the raw text, quotes included. A
    /// newline or end of input before the closing quote is an error.
    pub(crate) fn scan_string(&mut self) -> LexResult<()> {
        let location = self.token_location();
        let mut lexeme = String::new();
        let mut value = String::new();

        // Opening quote; dispatch guarantees it is present.
        if let Some(quote) = self.cursor.read() {
            lexeme.push(quote);
        }

        loop {
            match self.cursor.read() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedStringLiteral { location });
                }
                Some('"') => {
                    lexeme.push('"');
                    break;
                }
                Some('\\') => {
                    let escape_location = self.cursor_location();
                    let Some(escape) = self.cursor.read() else {
                        return Err(LexError::UnterminatedStringLiteral { location });
                    };
                    lexeme.push('\\');
                    lexeme.push(escape);
                    value.push(match escape {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '\\' => '\\',
                        '"' => '"',
                        '0' => '\0',
                        other => {
                            return Err(LexError::InvalidEscape {
                                escape: other,
                                location: escape_location,
                            });
                        }
                    });
                }
                Some(c) => {
                    lexeme.push(c);
                    value.push(c);
                }
            }
        }

        self.tokens.push(Token::Literal {
            value: LiteralValue::Text(value),
            lexeme,
            location,
        });
        Ok(())
    }
}
