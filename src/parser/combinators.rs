//! Parser combinator functions for building the pattern parser.
//!
//! ```text
//! pattern     := '^'? alternation '$'? EOF
//! alternation := branch ('|' branch)*
//! branch      := quantified*
//! quantified  := atom quantifier?
//! atom        := '(' alternation ')' | '[' '^'? set_item+ ']' | '.' | escape | literal
//! quantifier  := '*' | '+' | '?' | '{' n (',' m?)? '}'
//! set_item    := item '-' item | item
//! ```

use chumsky::prelude::*;

use super::intermediate_ast::{Branch, Expr, PatternExpr, SetItem};
use crate::lexer::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// A token standing for itself outside of a bracket set
pub(crate) fn literal() -> impl Parser<Token, Token, Error = ParserError> + Clone {
    filter(|t: &Token| t.is_plain_literal()).labelled("literal")
}

/// A decimal digit inside a `{n,m}` quantifier
pub(crate) fn digit() -> impl Parser<Token, char, Error = ParserError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::Char(c) if c.is_ascii_digit() => Ok(c),
        other => Err(Simple::custom(
            span,
            format!("expected a digit, found `{other}`"),
        )),
    })
}

/// Largest bound accepted in `{n,m}`
pub(crate) const MAX_REPETITION_BOUND: u32 = 10_000;

pub(crate) fn number() -> impl Parser<Token, u32, Error = ParserError> + Clone {
    digit()
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| match digits.parse::<u32>() {
            Ok(n) if n <= MAX_REPETITION_BOUND => Ok(n),
            _ => Err(Simple::custom(
                span,
                format!("repetition bound `{digits}` exceeds {MAX_REPETITION_BOUND}"),
            )),
        })
}

/// `*`, `+`, `?` and the brace forms, as `(min, max)`
pub(crate) fn quantifier() -> impl Parser<Token, (u32, Option<u32>), Error = ParserError> + Clone
{
    let braces = number()
        .then(just(Token::Comma).ignore_then(number().or_not()).or_not())
        .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace))
        .map(|(min, rest)| match rest {
            // {n}
            None => (min, Some(min)),
            // {n,} and {n,m}
            Some(max) => (min, max),
        });

    choice((
        just(Token::Star).to((0u32, None::<u32>)),
        just(Token::Plus).to((1u32, None::<u32>)),
        just(Token::Question).to((0u32, Some(1u32))),
        braces,
    ))
    .labelled("quantifier")
}

/// `[ ... ]`. Inside a set every token but `]` is an item; metacharacters keep their kind.
pub(crate) fn set() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    let item = filter(|t: &Token| *t != Token::CloseBracket);

    let range = item
        .clone()
        .then_ignore(just(Token::Dash))
        .then(item.clone())
        .map_with_span(|(start, end), span| SetItem::Range(start, end, span));

    just(Token::Caret)
        .or_not()
        .then(range.or(item.map(SetItem::Token)).repeated().at_least(1))
        .delimited_by(just(Token::OpenBracket), just(Token::CloseBracket))
        .map_with_span(|(caret, items), span| Expr::Set {
            negated: caret.is_some(),
            items,
            span,
        })
        .labelled("character set")
}

/// Branches separated by `|`
pub(crate) fn alternation() -> impl Parser<Token, Vec<Branch>, Error = ParserError> + Clone {
    recursive(|alternation| {
        let group = alternation
            .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
            .map_with_span(|branches, span| Expr::Group { branches, span });

        let atom = choice((
            group,
            set(),
            just(Token::Period).map_with_span(Expr::Token),
            filter(Token::is_escape).map_with_span(Expr::Token),
            literal().map_with_span(Expr::Token),
        ));

        let quantified =
            atom.then(quantifier().or_not())
                .map_with_span(|(atom, quantifier), span| match quantifier {
                    Some((min, max)) => Expr::Repeat {
                        inner: Box::new(atom),
                        min,
                        max,
                        span,
                    },
                    None => atom,
                });

        quantified.repeated().separated_by(just(Token::Pipe))
    })
}

/// A whole pattern with its optional anchors
pub(crate) fn pattern() -> impl Parser<Token, PatternExpr, Error = ParserError> {
    just(Token::Caret)
        .or_not()
        .then(alternation())
        .then(just(Token::Dollar).or_not())
        .then_ignore(end())
        .map_with_span(|((caret, branches), dollar), span| PatternExpr {
            anchored_start: caret.is_some(),
            anchored_end: dollar.is_some(),
            branches,
            span,
        })
}
