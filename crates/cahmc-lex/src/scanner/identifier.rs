//! Identifier and keyword scanning.

use crate::token::Token;
use crate::Scanner;

impl Scanner {
    /// Scans an identifier, keyword, or word-form operator.
    ///
    /// Consumes a maximal run of letters, digits, and underscores, then
    /// looks the text up case-insensitively, first in the keyword table
    /// and then in the word-operator table (`true`, `false`, `len`).
    /// The emitted token keeps the spelling exactly as it appeared in
    /// the source, whichever family it lands in.
    pub(crate) fn scan_identifier(&mut self) {
        let mut lexeme = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.cursor.read();
            } else {
                break;
            }
        }

        let location = self.token_location();
        let token = if let Some(kind) = self.tables.keyword(&lexeme) {
            Token::Keyword {
                kind,
                lexeme,
                location,
            }
        } else if let Some(kind) = self.tables.word_operator(&lexeme) {
            Token::Operator {
                kind,
                lexeme,
                location,
            }
        } else {
            Token::Identifier {
                name: lexeme,
                location,
            }
        };
        self.tokens.push(token);
    }
}
