//! Source location tracking.
//!
//! This module provides the types used to attach source coordinates to
//! tokens and diagnostics: an opaque file handle ([`FileId`]), a
//! line/column position ([`Location`]), and a registry mapping handles
//! back to display names ([`SourceMap`]).

use std::fmt;

/// An opaque identifier for one source buffer.
///
/// `FileId`s are assigned sequentially as buffers are registered with a
/// [`SourceMap`]. The lexer only ever copies the id into tokens and
/// errors; it never opens or reads files itself.
///
/// # Examples
///
/// ```
/// use cahmc_util::FileId;
///
/// let id = FileId::new(0);
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Creates a new `FileId` from a raw index.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw index value.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy `FileId` for testing.
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// A position in one source buffer.
///
/// Lines and columns are 1-based and denote the first character of the
/// lexeme a token was produced from. Line/column 0 is reserved for the
/// end-of-file sentinel, which does not correspond to any character.
///
/// # Examples
///
/// ```
/// use cahmc_util::{FileId, Location};
///
/// let loc = Location::new(FileId::DUMMY, 3, 7);
/// assert_eq!(loc.line, 3);
/// assert_eq!(loc.column, 7);
/// assert!(!loc.is_sentinel());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// The buffer this position belongs to.
    pub file: FileId,
    /// Line number (1-based; 0 for the sentinel).
    pub line: u32,
    /// Column number (1-based, in characters; 0 for the sentinel).
    pub column: u32,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(file: FileId, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Creates the sentinel location used by the end-of-file token.
    ///
    /// The sentinel keeps the file handle but carries no real position.
    #[inline]
    pub const fn sentinel(file: FileId) -> Self {
        Self {
            file,
            line: 0,
            column: 0,
        }
    }

    /// Returns true if this is the end-of-file sentinel.
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "end of file")
        } else {
            write!(f, "line {}, column {}", self.line, self.column)
        }
    }
}

/// Registry of source buffer names.
///
/// Callers register each buffer before lexing it and use the returned
/// [`FileId`] for the whole scan. When a diagnostic needs to be shown,
/// the id is resolved back to the registered name.
///
/// # Examples
///
/// ```
/// use cahmc_util::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add("script.cah");
/// assert_eq!(map.name(id), Some("script.cah"));
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    names: Vec<String>,
}

impl SourceMap {
    /// Creates an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a buffer name and returns its handle.
    pub fn add(&mut self, name: impl Into<String>) -> FileId {
        let id = FileId(self.names.len());
        self.names.push(name.into());
        id
    }

    /// Resolves a handle back to its registered name.
    pub fn name(&self, id: FileId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Returns the number of registered buffers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no buffers have been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
