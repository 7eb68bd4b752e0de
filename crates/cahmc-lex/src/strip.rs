//! Comment stripping.
//!
//! Comments are removed from the raw text before scanning starts. The
//! pass is purely textual, not token-aware. Every removed comment is
//! replaced by exactly as many newline characters as it contained, so
//! the line numbers of the tokens scanned afterwards are unaffected.
//!
//! Two comment families exist:
//!
//! - line comments: `#`, `//`, or `--` up to the end of the line
//!   (end of file is a valid terminator);
//! - block comments: `/* ... */` or `--[[ ... ]]`, possibly spanning
//!   several lines, matched non-greedily (the first closing delimiter
//!   wins).
//!
//! Block comments are stripped first, then line comments; otherwise the
//! `--` line rule would eat the opening line of a multi-line
//! `--[[ ... ]]` body and leave its closer dangling. Text removed by
//! the first pass is never seen by the second.

use cahmc_util::{FileId, LexError, LexResult, Location};

/// Strips all comments from `source`.
///
/// Returns the transformed text, or
/// [`LexError::UnterminatedBlockComment`] if a block comment opener has
/// no matching closer. The error carries the opener's position.
///
/// # Example
///
/// ```
/// use cahmc_lex::strip;
/// use cahmc_util::FileId;
///
/// let out = strip("x /* gone */ y # gone too", FileId::DUMMY).unwrap();
/// assert_eq!(out, "x  y ");
/// ```
pub fn strip(source: &str, file: FileId) -> LexResult<String> {
    let without_blocks = strip_block_comments(source, file)?;
    Ok(strip_line_comments(&without_blocks))
}

/// Removes `/* ... */` and `--[[ ... ]]` comments, keeping their
/// newline counts.
fn strip_block_comments(source: &str, file: FileId) -> LexResult<String> {
    let mut out = String::with_capacity(source.len());
    let mut line = 1u32;
    let mut column = 1u32;
    let mut i = 0usize;

    while i < source.len() {
        let tail = &source[i..];

        let delimiters = if tail.starts_with("/*") {
            Some(("/*", "*/"))
        } else if tail.starts_with("--[[") {
            Some(("--[[", "]]"))
        } else {
            None
        };

        if let Some((opener, closer)) = delimiters {
            let body_start = i + opener.len();
            // Non-greedy: the first closer terminates this comment.
            let Some(offset) = source[body_start..].find(closer) else {
                return Err(LexError::UnterminatedBlockComment {
                    opener: opener.to_string(),
                    location: Location::new(file, line, column),
                });
            };
            let end = body_start + offset + closer.len();
            for c in source[i..end].chars() {
                if c == '\n' {
                    out.push('\n');
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            i = end;
            continue;
        }

        let Some(c) = tail.chars().next() else { break };
        out.push(c);
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
        i += c.len_utf8();
    }

    Ok(out)
}

/// Removes `#`, `//`, and `--` comments up to the end of their line.
/// The terminating newline itself is kept.
fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut i = 0usize;

    while i < source.len() {
        let tail = &source[i..];

        if tail.starts_with('#') || tail.starts_with("//") || tail.starts_with("--") {
            match tail.find('\n') {
                Some(offset) => {
                    i += offset;
                    continue;
                }
                // Comment runs to end of file.
                None => break,
            }
        }

        let Some(c) = tail.chars().next() else { break };
        out.push(c);
        i += c.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ok(source: &str) -> String {
        strip(source, FileId::DUMMY).unwrap()
    }

    #[test]
    fn test_no_comments_is_identity() {
        assert_eq!(strip_ok("x = 1\ny = 2\n"), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_hash_line_comment() {
        assert_eq!(strip_ok("x # comment\ny"), "x \ny");
    }

    #[test]
    fn test_slash_line_comment() {
        assert_eq!(strip_ok("x // comment\ny"), "x \ny");
    }

    #[test]
    fn test_dash_line_comment() {
        assert_eq!(strip_ok("x -- comment\ny"), "x \ny");
    }

    #[test]
    fn test_line_comment_at_end_of_file() {
        // No trailing newline needed; end of file terminates the comment.
        assert_eq!(strip_ok("x # no newline"), "x ");
    }

    #[test]
    fn test_block_comment_single_line() {
        assert_eq!(strip_ok("a /* gone */ b"), "a  b");
    }

    #[test]
    fn test_block_comment_multi_line_keeps_newlines() {
        let out = strip_ok("a /* one\ntwo\nthree */ b");
        assert_eq!(out, "a \n\n b");
    }

    #[test]
    fn test_lua_style_block_comment() {
        let out = strip_ok("a --[[ one\ntwo ]] b");
        assert_eq!(out, "a \n b");
    }

    #[test]
    fn test_block_comments_are_non_greedy() {
        // Each block is removed independently; x survives.
        assert_eq!(strip_ok("/* a */ x /* b */"), " x ");
    }

    #[test]
    fn test_lua_block_beats_dash_line_rule() {
        // `--[[` must be recognized as a block opener, not a `--` line
        // comment, or the closer would be left dangling.
        let out = strip_ok("--[[ first\nsecond ]]\nz");
        assert_eq!(out, "\n\nz");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = strip("ab /* never closed", FileId::DUMMY).unwrap_err();
        match err {
            LexError::UnterminatedBlockComment { opener, location } => {
                assert_eq!(opener, "/*");
                assert_eq!(location.line, 1);
                assert_eq!(location.column, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_lua_block_comment() {
        let err = strip("x\n--[[ open", FileId::DUMMY).unwrap_err();
        match err {
            LexError::UnterminatedBlockComment { opener, location } => {
                assert_eq!(opener, "--[[");
                assert_eq!(location.line, 2);
                assert_eq!(location.column, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_newline_parity() {
        let source = "a /* 1\n2\n3 */ b # tail\nc --[[ x\ny ]] d\n";
        let out = strip_ok(source);
        let newlines_in = source.matches('\n').count();
        let newlines_out = out.matches('\n').count();
        assert_eq!(newlines_in, newlines_out);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_ok(""), "");
    }
}
