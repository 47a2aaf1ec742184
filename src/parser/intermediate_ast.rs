//! Intermediate expression tree produced by the combinators
//!
//! The combinators build this owned tree with byte spans attached; `ast_conversion`
//! then lowers it into the arena [`crate::ast::Ast`], where parent links live.

use crate::lexer::{Span, Token};

/// One branch of an alternation: a sequence of expressions
pub(crate) type Branch = Vec<Expr>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PatternExpr {
    pub anchored_start: bool,
    pub anchored_end: bool,
    pub branches: Vec<Branch>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    /// Literal, wildcard or escape
    Token(Token, Span),
    /// `( ... )`
    Group { branches: Vec<Branch>, span: Span },
    /// `[ ... ]`
    Set {
        negated: bool,
        items: Vec<SetItem>,
        span: Span,
    },
    /// Atom followed by a quantifier
    Repeat {
        inner: Box<Expr>,
        min: u32,
        max: Option<u32>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SetItem {
    Token(Token),
    Range(Token, Token, Span),
}
