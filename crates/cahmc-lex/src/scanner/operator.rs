//! Longest-match operator scanning.

use crate::token::Token;
use crate::Scanner;

impl Scanner {
    /// Attempts to scan an operator at the cursor, preferring the
    /// longest lexeme the tables know.
    ///
    /// Lookahead is done with `peek` only; nothing is consumed until a
    /// table entry has matched. `+` followed by `=` therefore becomes a
    /// single `+=` token, and `(` followed by `)` a single `()`
    /// function-call token.
    ///
    /// Returns false without consuming anything when the current
    /// character starts no operator.
    pub(crate) fn scan_operator(&mut self) -> bool {
        let mut candidate = String::new();
        for offset in 0..self.tables.max_operator_len() {
            match self.cursor.peek_at(offset) {
                Some(c) => candidate.push(c),
                None => break,
            }
        }

        // Ties break in favor of the longest matching lexeme.
        while !candidate.is_empty() {
            if let Some(kind) = self.tables.operator(&candidate) {
                let location = self.token_location();
                for _ in 0..candidate.chars().count() {
                    self.cursor.read();
                }
                self.tokens.push(Token::Operator {
                    kind,
                    lexeme: candidate,
                    location,
                });
                return true;
            }
            candidate.pop();
        }

        false
    }
}
