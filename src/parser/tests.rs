use rstest::rstest;
use std::ops::Range;

use crate::ast::{NodeKind, ValidationError};
use crate::lexer::{LexError, Token};
use crate::parser::{parse, ParseError};

fn outline(source: &str) -> String {
    parse(source)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
        .outline()
        .trim_end()
        .to_string()
}

#[test]
fn test_grouped_alternation_with_repetition() {
    insta::assert_snapshot!(outline("a(b|c)d{2,3}"), @r"
    begin
      token(a)
      block(sub_pattern=true)
        alternative
          token(b)
          token(c)
      repetition(2,3)
        token(d)
    end
    ");
}

#[test]
fn test_top_level_alternation_wraps_long_branches() {
    insta::assert_snapshot!(outline("ab|c"), @r"
    begin
      alternative
        block(sub_pattern=true)
          token(a)
          token(b)
        token(c)
    end
    ");
}

#[test]
fn test_bracket_set_is_a_choice_block() {
    insta::assert_snapshot!(outline("[a-c.x]"), @r"
    begin
      block(sub_pattern=false)
        character-class(a-c)
        token(.)
        token(x)
    end
    ");
}

#[test]
fn test_quantified_group() {
    insta::assert_snapshot!(outline("(ab)*.+"), @r"
    begin
      repetition(0,)
        block(sub_pattern=true)
          token(a)
          token(b)
      repetition(1,)
        token(.)
    end
    ");
}

#[test]
fn test_escape_is_kept_as_token() {
    insta::assert_snapshot!(outline(r"a\d?"), @r"
    begin
      token(a)
      repetition(0,1)
        token(\d)
    end
    ");
}

#[test]
fn test_empty_pattern() {
    insta::assert_snapshot!(outline(""), @r"
    begin
    end
    ");
}

#[test]
fn test_anchors_do_not_change_the_shape() {
    assert_eq!(outline("^ab$"), outline("ab"));
}

#[test]
fn test_metacharacters_inside_set_keep_their_kind() {
    let ast = parse("[*|(]").unwrap();
    let tokens: Vec<Token> = ast
        .iter()
        .filter_map(|(_, node)| match node.kind() {
            NodeKind::Token(token) => Some(*token),
            _ => None,
        })
        .collect();
    assert_eq!(tokens, vec![Token::Star, Token::Pipe, Token::OpenParen]);
}

#[test]
fn test_parent_links_follow_structure() {
    let ast = parse("(.)").unwrap();
    let (wildcard, _) = ast
        .iter()
        .find(|(_, node)| matches!(node.kind(), NodeKind::Token(Token::Period)))
        .unwrap();
    let parent = ast.parent(wildcard).unwrap();
    assert_eq!(*parent.kind(), NodeKind::sub_pattern());
    let grandparent = parent.parent().map(|id| *ast.kind(id));
    assert_eq!(grandparent, Some(NodeKind::Begin));
}

#[rstest]
#[case::unclosed_group("(ab", None)]
#[case::unopened_group("ab)", Some(2..3))]
#[case::unclosed_set("[ab", None)]
#[case::empty_set("[]", None)]
#[case::leading_quantifier("*a", None)]
#[case::double_quantifier("a**", Some(2..3))]
#[case::dangling_brace("a{2", None)]
#[case::brace_without_atom("{2}", None)]
#[case::caret_in_the_middle("a^b", Some(1..2))]
fn test_syntax_errors(#[case] source: &str, #[case] span: Option<Range<usize>>) {
    let err = parse(source).unwrap_err();
    assert!(
        matches!(err, ParseError::Syntax { .. }),
        "expected syntax error for {source:?}, got {err:?}"
    );
    assert!(err.span().is_some());
    if let Some(span) = span {
        assert_eq!(err.span(), Some(span), "span for {source:?}");
    }
}

#[test]
fn test_repetition_bound_ceiling() {
    assert!(parse("a{10000}").is_ok());
    assert!(matches!(parse("a{10001}"), Err(ParseError::Syntax { .. })));
    assert!(matches!(parse("a{1,10001}"), Err(ParseError::Syntax { .. })));
}

#[rstest]
#[case::empty_group("()")]
#[case::empty_trailing_branch("a|")]
#[case::empty_leading_branch("(|a)")]
fn test_empty_constructs_are_rejected(#[case] source: &str) {
    let err = parse(source).unwrap_err();
    assert!(
        matches!(err, ParseError::Syntax { .. }),
        "expected syntax error for {source:?}, got {err:?}"
    );
}

#[test]
fn test_reversed_range_is_rejected() {
    let err = parse("[z-a]").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Invalid {
            source: ValidationError::EmptyRange { start: 'z', end: 'a' },
            ..
        }
    ));
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let err = parse("a{3,1}").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Invalid {
            source: ValidationError::InvertedBounds { min: 3, max: 1 },
            ..
        }
    ));
}

#[test]
fn test_escape_range_boundary_is_rejected() {
    let err = parse(r"[a-\d]").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Invalid {
            source: ValidationError::NonLiteralBoundary(Token::Escape('d')),
            ..
        }
    ));
}

#[test]
fn test_negated_set_is_unsupported() {
    let err = parse("[^a]").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Unsupported {
            construct: "negated character set",
            ..
        }
    ));
}

#[test]
fn test_lex_errors_are_surfaced() {
    let err = parse("ab\\").unwrap_err();
    assert_eq!(
        err,
        ParseError::Lex(LexError::UnexpectedInput {
            offset: 2,
            fragment: "\\".to_string()
        })
    );
}
