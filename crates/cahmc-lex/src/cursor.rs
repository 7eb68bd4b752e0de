//! Character cursor over a source buffer.
//!
//! The cursor owns the (comment-stripped) text and exposes only
//! single-character `read`/`peek` plus position queries; the scanner
//! never needs bulk or asynchronous reads. End of input is signalled by
//! `None`, which no valid character can collide with.

/// A position-tracked reader over one in-memory text buffer.
///
/// The cursor advances monotonically; it never rewinds. Bounded
/// lookahead is available through [`Cursor::peek`] and
/// [`Cursor::peek_at`], which never mutate state.
///
/// # Example
///
/// ```
/// use cahmc_lex::Cursor;
///
/// let mut cursor = Cursor::new("ab".to_string());
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.read(), Some('a'));
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.read(), None);
/// ```
pub struct Cursor {
    /// The text being traversed.
    source: String,

    /// Current byte position in the source.
    position: usize,

    /// Number of characters consumed so far.
    index: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor over the given text.
    pub fn new(source: String) -> Self {
        Self {
            source,
            position: 0,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// Advances the character index by one and bumps the line counter
    /// when the consumed character is a newline. Returns `None` at end
    /// of input.
    pub fn read(&mut self) -> Option<char> {
        let c = self.source[self.position..].chars().next()?;
        self.position += c.len_utf8();
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Returns the character `offset` characters ahead without
    /// consuming anything. `peek_at(0)` is the next character.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        let mut pos = self.position;
        for _ in 0..offset {
            // Fast path for ASCII (most common case)
            let b = *self.source.as_bytes().get(pos)?;
            if b < 128 {
                pos += 1;
            } else {
                pos += self.source[pos..].chars().next()?.len_utf8();
            }
        }
        self.source[pos..].chars().next()
    }

    /// Returns true if the cursor has consumed the whole buffer.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the number of characters consumed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let".to_string());
        assert_eq!(cursor.peek(), Some('l'));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_read_advances() {
        let mut cursor = Cursor::new("abc".to_string());
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.read(), Some('b'));
        assert_eq!(cursor.read(), Some('c'));
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.index(), 3);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_never_mutates() {
        let mut cursor = Cursor::new("xy".to_string());
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.index(), 0);
        cursor.read();
        assert_eq!(cursor.peek(), Some('y'));
    }

    #[test]
    fn test_peek_at() {
        let cursor = Cursor::new("abc".to_string());
        assert_eq!(cursor.peek_at(0), Some('a'));
        assert_eq!(cursor.peek_at(1), Some('b'));
        assert_eq!(cursor.peek_at(2), Some('c'));
        assert_eq!(cursor.peek_at(3), None);
        assert_eq!(cursor.peek_at(100), None);
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nbb\nc".to_string());
        assert_eq!(cursor.line(), 1);
        cursor.read(); // 'a'
        assert_eq!(cursor.column(), 2);
        cursor.read(); // '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.read(); // 'b'
        cursor.read(); // 'b'
        cursor.read(); // '\n'
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_utf8_characters() {
        let mut cursor = Cursor::new("αβ".to_string());
        assert_eq!(cursor.peek_at(1), Some('β'));
        assert_eq!(cursor.read(), Some('α'));
        assert_eq!(cursor.read(), Some('β'));
        assert_eq!(cursor.read(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new(String::new());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.line(), 1);
    }
}
