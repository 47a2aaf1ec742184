//! Errors raised while turning a pattern string into an AST

use chumsky::error::{Simple, SimpleReason};

use crate::ast::ValidationError;
use crate::lexer::{LexError, Span, Token};
use thiserror::Error;

/// A malformed pattern. Generation never starts when parsing fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{message} at {}..{}", .span.start, .span.end)]
    Syntax { message: String, span: Span },

    #[error("{source} at {}..{}", .span.start, .span.end)]
    Invalid {
        source: ValidationError,
        span: Span,
    },

    #[error("{construct} is not supported (at {}..{})", .span.start, .span.end)]
    Unsupported { construct: &'static str, span: Span },
}

impl ParseError {
    /// Byte range of the offending input, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(LexError::UnexpectedInput { offset, fragment }) => {
                Some(*offset..*offset + fragment.len())
            }
            ParseError::Syntax { span, .. }
            | ParseError::Invalid { span, .. }
            | ParseError::Unsupported { span, .. } => Some(span.clone()),
        }
    }

    pub(crate) fn syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Convert the first combinator error into a syntax error
    pub(crate) fn from_simple(errors: Vec<Simple<Token>>) -> Self {
        let Some(err) = errors.into_iter().next() else {
            return ParseError::syntax("invalid pattern", 0..0);
        };
        let message = match err.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => format!("unclosed `{delimiter}`"),
            SimpleReason::Unexpected => match err.found() {
                Some(token) => format!("unexpected `{token}`"),
                None => "unexpected end of pattern".to_string(),
            },
        };
        ParseError::syntax(message, err.span())
    }
}
