//! Public API for the parser.

use chumsky::prelude::*;
use chumsky::Stream;

use super::ast_conversion::convert_pattern;
use super::combinators::pattern;
use super::error::ParseError;
use crate::ast::Ast;
use crate::lexer::{tokenize, Span, Token};

/// Parse a pattern string into an AST
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    let tokens = tokenize(source)?;
    let ast = parse_tokens(tokens, source.len())?;
    log::debug!("parsed {:?} into {} nodes", source, ast.len());
    Ok(ast)
}

/// Parse an already tokenized pattern. `source_len` is used as the end-of-input span.
pub fn parse_tokens(tokens: Vec<(Token, Span)>, source_len: usize) -> Result<Ast, ParseError> {
    let eoi = source_len..source_len;
    let expr = pattern()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(ParseError::from_simple)?;
    if expr.anchored_start || expr.anchored_end {
        log::trace!(
            "anchors: start={} end={}",
            expr.anchored_start,
            expr.anchored_end
        );
    }
    convert_pattern(expr)
}
