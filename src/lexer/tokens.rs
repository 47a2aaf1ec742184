//! Token definitions for the pattern dialect
//!
//! Every character of a pattern becomes exactly one token. Metacharacters get their own
//! variant so the parser can match on them; anything else is a `Char`. A backslash and the
//! character after it form a single `Escape` token.
use logos::Logos;
use std::fmt;

/// All possible tokens in a pattern
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Token {
    // Anchors
    #[token("^")]
    Caret,
    #[token("$")]
    Dollar,

    // Any character
    #[token(".")]
    Period,

    #[token("|")]
    Pipe,

    // Grouping
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Range and bound separators
    #[token("-")]
    Dash,
    #[token(",")]
    Comma,

    // Quantifiers
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,

    #[regex(r"\\.", |lex| lex.slice().chars().nth(1))]
    Escape(char),

    // Everything that is not a metacharacter
    #[regex(r"[^\^\$\.\|\(\)\[\]\{\}\-,\*\+\?\\]", |lex| lex.slice().chars().next())]
    Char(char),
}

impl Token {
    /// Name of the token kind, as shown in token listings and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Caret => "Caret",
            Token::Dollar => "Dollar",
            Token::Period => "Period",
            Token::Pipe => "Pipe",
            Token::OpenParen => "OpenParen",
            Token::CloseParen => "CloseParen",
            Token::OpenBracket => "OpenBracket",
            Token::CloseBracket => "CloseBracket",
            Token::OpenBrace => "OpenBrace",
            Token::CloseBrace => "CloseBrace",
            Token::Dash => "Dash",
            Token::Comma => "Comma",
            Token::Star => "Star",
            Token::Plus => "Plus",
            Token::Question => "Question",
            Token::Escape(_) => "Escape",
            Token::Char(_) => "Char",
        }
    }

    /// The single character this token stands for when taken literally.
    ///
    /// Escapes have no literal character: `\d` is not the character `d`.
    pub fn literal_char(&self) -> Option<char> {
        let ch = match self {
            Token::Caret => '^',
            Token::Dollar => '$',
            Token::Period => '.',
            Token::Pipe => '|',
            Token::OpenParen => '(',
            Token::CloseParen => ')',
            Token::OpenBracket => '[',
            Token::CloseBracket => ']',
            Token::OpenBrace => '{',
            Token::CloseBrace => '}',
            Token::Dash => '-',
            Token::Comma => ',',
            Token::Star => '*',
            Token::Plus => '+',
            Token::Question => '?',
            Token::Escape(_) => return None,
            Token::Char(c) => *c,
        };
        Some(ch)
    }

    /// Source text of the token
    pub fn value(&self) -> String {
        match self {
            Token::Escape(c) => format!("\\{c}"),
            other => other.literal_char().map(String::from).unwrap_or_default(),
        }
    }

    /// Check if this token is the "any character" metacharacter
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::Period)
    }

    /// Check if this token is an escape sequence
    pub fn is_escape(&self) -> bool {
        matches!(self, Token::Escape(_))
    }

    /// Check if this token stands for itself outside of a bracket set
    pub fn is_plain_literal(&self) -> bool {
        matches!(
            self,
            Token::Char(_) | Token::Dash | Token::Comma | Token::CloseBracket | Token::CloseBrace
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters() {
        let mut lexer = Token::lexer("^$.|()[]{}-,*+?");
        assert_eq!(lexer.next(), Some(Ok(Token::Caret)));
        assert_eq!(lexer.next(), Some(Ok(Token::Dollar)));
        assert_eq!(lexer.next(), Some(Ok(Token::Period)));
        assert_eq!(lexer.next(), Some(Ok(Token::Pipe)));
        assert_eq!(lexer.next(), Some(Ok(Token::OpenParen)));
        assert_eq!(lexer.next(), Some(Ok(Token::CloseParen)));
        assert_eq!(lexer.next(), Some(Ok(Token::OpenBracket)));
        assert_eq!(lexer.next(), Some(Ok(Token::CloseBracket)));
        assert_eq!(lexer.next(), Some(Ok(Token::OpenBrace)));
        assert_eq!(lexer.next(), Some(Ok(Token::CloseBrace)));
        assert_eq!(lexer.next(), Some(Ok(Token::Dash)));
        assert_eq!(lexer.next(), Some(Ok(Token::Comma)));
        assert_eq!(lexer.next(), Some(Ok(Token::Star)));
        assert_eq!(lexer.next(), Some(Ok(Token::Plus)));
        assert_eq!(lexer.next(), Some(Ok(Token::Question)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_char_tokens() {
        let mut lexer = Token::lexer("a1 é");
        assert_eq!(lexer.next(), Some(Ok(Token::Char('a'))));
        assert_eq!(lexer.next(), Some(Ok(Token::Char('1'))));
        assert_eq!(lexer.next(), Some(Ok(Token::Char(' '))));
        assert_eq!(lexer.next(), Some(Ok(Token::Char('é'))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_escape_tokens() {
        let mut lexer = Token::lexer(r"\d\.\\");
        assert_eq!(lexer.next(), Some(Ok(Token::Escape('d'))));
        assert_eq!(lexer.next(), Some(Ok(Token::Escape('.'))));
        assert_eq!(lexer.next(), Some(Ok(Token::Escape('\\'))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_lone_backslash_is_an_error() {
        let mut lexer = Token::lexer("\\");
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_values() {
        assert_eq!(Token::Char('x').value(), "x");
        assert_eq!(Token::Period.value(), ".");
        assert_eq!(Token::Escape('w').value(), "\\w");
        assert_eq!(Token::Escape('w').literal_char(), None);
        assert_eq!(Token::Dash.literal_char(), Some('-'));
    }
}
