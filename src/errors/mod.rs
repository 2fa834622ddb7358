//! Error types and error handling for the lexer.
//!
//! Every failure of `tokenize` is a single lexical error carrying the
//! position of the offending lexeme. The error can be asked for a short
//! name and an optional tip, which the command-line front end uses to
//! render a caret diagnostic.

pub mod errors;
