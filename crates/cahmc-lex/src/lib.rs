//! cahmc-lex - Lexical Analyzer for Cahmann Script
//!
//! This crate is the lexical front end of the Cahmann Script
//! interpreter. It transforms raw source text into an ordered,
//! position-annotated token stream for the parser.
//!
//! # Pipeline
//!
//! raw text -> [`strip`] (comment removal) -> [`Cursor`] -> [`Scanner`]
//! (consulting [`LexicalTables`]) -> `Vec<Token>`, terminated by exactly
//! one end-of-file token.
//!
//! The convenience entry point [`tokenize`] runs the whole pipeline.
//! The crate performs no I/O: callers read the buffer, register a name
//! with a `cahmc_util::SourceMap`, and pass the text plus the returned
//! [`FileId`](cahmc_util::FileId).
//!
//! # Example
//!
//! ```
//! use cahmc_lex::{tokenize, Token};
//! use cahmc_util::FileId;
//!
//! let tokens = tokenize("func greet()\nendfunc", FileId::DUMMY).unwrap();
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! # Token categories
//!
//! - **Keywords** - case-insensitive reserved words (`func`, `endif`,
//!   `while`, ...); some have two spellings mapping to one tag
//!   (`import`/`use`, `local`/`module`).
//! - **Operators** - one- and two-character lexemes classified by
//!   greedy longest-match (`+=` is one token, `()` is the function-call
//!   shorthand), plus the word forms `true`, `false`, and `len`.
//! - **Identifiers** - `[A-Za-z_][A-Za-z0-9_]*`.
//! - **Literals** - decimal numbers and double-quoted strings.
//! - **Special** - the end-of-file marker, emitted exactly once.
//!
//! Lexical errors (unterminated block comment, unrecognized character,
//! string errors) abort the scan of the buffer; no partial token
//! sequence is ever returned.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
mod edge_cases;
pub mod scanner;
mod strip;
pub mod tables;
pub mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use strip::strip;
pub use tables::LexicalTables;
pub use token::{
    KeywordKind, LiteralKind, LiteralValue, OperatorKind, SpecialKind, Token,
};

use cahmc_util::{FileId, LexResult};

/// Tokenizes one source buffer: strips comments, then scans.
///
/// Returns the complete token sequence, whose last element is always
/// the end-of-file token, or the first lexical error. Each invocation
/// owns its state, so different buffers may be tokenized in parallel.
pub fn tokenize(source: &str, file: FileId) -> LexResult<Vec<Token>> {
    let stripped = strip(source, file)?;
    Scanner::new(stripped, file).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cahmc_util::LexError;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source, FileId::DUMMY).unwrap()
    }

    #[test]
    fn test_function_definition_tag_sequence() {
        let tokens = lex("func foo()\n  return 1\nendfunc");

        assert_eq!(tokens.len(), 7);
        assert!(matches!(
            tokens[0],
            Token::Keyword {
                kind: KeywordKind::Function,
                ..
            }
        ));
        match &tokens[1] {
            Token::Identifier { name, .. } => assert_eq!(name, "foo"),
            other => panic!("unexpected token: {other:?}"),
        }
        assert!(matches!(
            tokens[2],
            Token::Operator {
                kind: OperatorKind::FunctionCall,
                ..
            }
        ));
        assert!(matches!(
            tokens[3],
            Token::Keyword {
                kind: KeywordKind::FunctionReturnValue,
                ..
            }
        ));
        assert!(matches!(
            tokens[4],
            Token::Literal {
                value: LiteralValue::Number(n),
                ..
            } if n == 1.0
        ));
        assert!(matches!(
            tokens[5],
            Token::Keyword {
                kind: KeywordKind::FunctionEnd,
                ..
            }
        ));
        assert!(tokens[6].is_eof());
    }

    #[test]
    fn test_empty_buffer_yields_exactly_eof() {
        let tokens = lex("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_line_comment_preserves_line_numbers() {
        let tokens = lex("x -- trailing comment\ny");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].matches("x"));
        assert!(tokens[1].matches("y"));
        assert_eq!(tokens[0].location().line, 1);
        assert_eq!(tokens[1].location().line, 2);
        assert_eq!(tokens[1].location().column, 1);
    }

    #[test]
    fn test_block_comment_preserves_line_numbers() {
        let tokens = lex("a /* one\ntwo\nthree */ b\nc");
        assert!(tokens[0].matches("a"));
        assert_eq!(tokens[0].location().line, 1);
        assert!(tokens[1].matches("b"));
        assert_eq!(tokens[1].location().line, 3);
        assert!(tokens[2].matches("c"));
        assert_eq!(tokens[2].location().line, 4);
    }

    #[test]
    fn test_keyword_case_insensitivity_end_to_end() {
        let upper = lex("IMPORT");
        let mixed = lex("Import");
        let lower = lex("import");
        for tokens in [&upper, &mixed, &lower] {
            assert!(matches!(
                tokens[0],
                Token::Keyword {
                    kind: KeywordKind::Import,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_longest_match_end_to_end() {
        let tokens = lex("+=");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            tokens[0],
            Token::Operator {
                kind: OperatorKind::AdditionAssignment,
                ..
            }
        ));

        let tokens = lex("()");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            tokens[0],
            Token::Operator {
                kind: OperatorKind::FunctionCall,
                ..
            }
        ));
    }

    #[test]
    fn test_unrecognized_character_cites_position() {
        let err = tokenize("@", FileId::DUMMY).unwrap_err();
        match err {
            LexError::UnrecognizedCharacter {
                character,
                location,
            } => {
                assert_eq!(character, '@');
                assert_eq!((location.line, location.column), (1, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_block_comment_is_an_error() {
        let err = tokenize("x /* open", FileId::DUMMY).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedBlockComment { .. }));
    }

    #[test]
    fn test_word_operators_in_expression() {
        let tokens = lex("if len name > 0 then flag = true else flag = FALSE endif");
        let kinds: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Operator { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                OperatorKind::LengthOperator,
                OperatorKind::GreaterThan,
                OperatorKind::Assignment,
                OperatorKind::TrueExpression,
                OperatorKind::Assignment,
                OperatorKind::FalseExpression,
            ]
        );
    }

    #[test]
    fn test_counter_loop_program() {
        let source = "count i = 0 to 10 do\n  total += i\nendcount";
        let tokens = lex(source);
        let kinds: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Keyword { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                KeywordKind::CounterLoopBegin,
                KeywordKind::ControlledCounterLoopCountTo,
                KeywordKind::EndLoopHead,
                KeywordKind::CounterLoopEnd,
            ]
        );
    }

    #[test]
    fn test_module_program_with_all_comment_styles() {
        let source = "\
module helper # script-local\nfunc twice(x) ret // doubles\n  return x * 2\nendfunc\n/* trailing\nblock */\nexport twice";
        let tokens = lex(source);
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Keyword {
                kind: KeywordKind::Local,
                ..
            }
        )));
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Keyword {
                kind: KeywordKind::ModuleExport,
                ..
            }
        )));
        // `export twice` sits on line 7 thanks to newline parity.
        let export = tokens
            .iter()
            .find(|t| t.matches("export"))
            .expect("export token");
        assert_eq!(export.location().line, 7);
    }

    #[test]
    fn test_tokens_carry_file_handle() {
        let file = FileId::new(5);
        let tokens = tokenize("x", file).unwrap();
        assert!(tokens.iter().all(|t| t.location().file == file));
    }

    #[test]
    fn test_single_line_repl_buffer() {
        // A one-line prompt buffer is the same contract, no state kept
        // between calls.
        let first = lex("x = 1");
        let second = lex("x = 1");
        assert_eq!(first, second);
    }
}
