//! Implementation of the pattern lexer
//!
//! The actual tokenization is handled entirely by logos. An unrecognised fragment is
//! never skipped: a pattern with a dangling backslash is rejected.

use crate::lexer::tokens::Token;
use logos::Logos;
use thiserror::Error;

/// Byte range of a token in the source pattern
pub type Span = logos::Span;

/// Errors produced while tokenizing a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected input `{fragment}` at offset {offset}")]
    UnexpectedInput { offset: usize, fragment: String },
}

/// Tokenize a pattern, keeping the source span of every token
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError::UnexpectedInput {
                    offset: lexer.span().start,
                    fragment: lexer.slice().to_string(),
                })
            }
        }
    }

    log::trace!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}

/// Tokenize a pattern and drop the spans
pub fn tokenize_plain(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize(source)?.into_iter().map(|(t, _)| t).collect())
}
