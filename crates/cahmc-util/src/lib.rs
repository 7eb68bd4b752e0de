//! cahmc-util - Foundation types for the Cahmann Script interpreter.
//!
//! This crate holds the small set of types shared by every interpreter
//! phase:
//!
//! - [`FileId`] / [`Location`] / [`SourceMap`] - source coordinates for
//!   diagnostics. Tokens record the file, line, and column of the first
//!   character of their lexeme.
//! - [`LexError`] / [`LexResult`] - the structured error surface of the
//!   lexical front end. Formatting and display are the caller's job.
//!
//! The lexer never performs I/O; callers read buffers, register a name
//! with the [`SourceMap`], and hand the text plus the returned handle to
//! the lexer.

#![warn(missing_docs)]

pub mod error;
pub mod location;

pub use error::{LexError, LexResult};
pub use location::{FileId, Location, SourceMap};
