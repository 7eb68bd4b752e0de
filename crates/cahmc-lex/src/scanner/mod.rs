//! Scanner module.
//!
//! The classification loop is organized into focused components:
//! - `core` - Scanner struct, main loop, whitespace handling
//! - `identifier` - Identifier and keyword scanning
//! - `literal` - Number and string literal scanning
//! - `operator` - Longest-match operator scanning

mod core;
mod identifier;
mod literal;
mod operator;

pub use core::Scanner;
