//! Lexical analysis for L-code.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a fully materialized sequence of tokens. It handles:
//!
//! - Tokenization of each source line using an ordered table of regex patterns
//! - Recognition of keywords (case-insensitive), booleans, identifiers,
//!   integer and floating point literals, operators and line comments
//! - Line and column tracking for every token and for lexical errors

pub mod lexer;
pub mod tokens;
