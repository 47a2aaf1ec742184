//! Lexer module for the pattern dialect
//!
//! This module contains the tokenization logic, including token definitions and the
//! lexer implementation. The parser consumes `(Token, Span)` pairs so syntax errors can
//! point back into the pattern.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_plain, LexError, Span};
pub use tokens::Token;

/// Render a token stream as one `Kind value` line per token
pub fn token_listing(tokens: &[(Token, Span)]) -> String {
    tokens
        .iter()
        .map(|(token, span)| {
            format!(
                "{:<12} {:<4} {}..{}",
                token.kind_name(),
                token.value(),
                span.start,
                span.end
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
