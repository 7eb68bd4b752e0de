//! Edge case and property tests for cahmc-lex
