//! AST fixtures built by shape
//!
//! [`build_ast`] wraps the given body in `Begin` and appends an empty `End`, the same
//! layout the parser produces.

use crate::ast::{Ast, AstBuilder, CharacterClass, NodeId, NodeKind, Repetition, ValidationError};
use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Token(Token),
    Class(char, char),
    Alternative(Vec<Shape>),
    /// Sub-pattern block, `( ... )`
    Group(Vec<Shape>),
    /// Choice block, `[ ... ]`
    Choice(Vec<Shape>),
    Repeat {
        min: u32,
        max: Option<u32>,
        inner: Box<Shape>,
    },
}

pub fn lit(ch: char) -> Shape {
    Shape::Token(Token::Char(ch))
}

pub fn escape(ch: char) -> Shape {
    Shape::Token(Token::Escape(ch))
}

pub fn wildcard() -> Shape {
    Shape::Token(Token::Period)
}

pub fn class(start: char, end: char) -> Shape {
    Shape::Class(start, end)
}

pub fn alternative(branches: Vec<Shape>) -> Shape {
    Shape::Alternative(branches)
}

pub fn group(children: Vec<Shape>) -> Shape {
    Shape::Group(children)
}

pub fn choice(children: Vec<Shape>) -> Shape {
    Shape::Choice(children)
}

pub fn repeat(min: u32, max: Option<u32>, inner: Shape) -> Shape {
    Shape::Repeat {
        min,
        max,
        inner: Box::new(inner),
    }
}

/// Build `Begin[body], End[]`.
pub fn build_ast(body: Vec<Shape>) -> Result<Ast, ValidationError> {
    let mut builder = AstBuilder::new();
    let begin = builder.root(NodeKind::Begin);
    for shape in body {
        push_shape(&mut builder, shape, begin)?;
    }
    builder.root(NodeKind::End);
    builder.finish()
}

fn push_shape(
    builder: &mut AstBuilder,
    shape: Shape,
    parent: NodeId,
) -> Result<(), ValidationError> {
    let (kind, children) = match shape {
        Shape::Token(token) => (NodeKind::Token(token), Vec::new()),
        Shape::Class(start, end) => (
            NodeKind::CharacterClass(CharacterClass::from_chars(start, end)?),
            Vec::new(),
        ),
        Shape::Alternative(children) => (NodeKind::Alternative, children),
        Shape::Group(children) => (NodeKind::sub_pattern(), children),
        Shape::Choice(children) => (NodeKind::choice_block(), children),
        Shape::Repeat { min, max, inner } => {
            (NodeKind::Repetition(Repetition::new(min, max)?), vec![*inner])
        }
    };
    let id = builder.push(kind, Some(parent))?;
    for child in children {
        push_shape(builder, child, id)?;
    }
    Ok(())
}

/// `a(b|c)d{2,3}`, assembled by hand.
pub fn end_to_end() -> Ast {
    build_ast(vec![
        lit('a'),
        group(vec![alternative(vec![lit('b'), lit('c')])]),
        repeat(2, Some(3), lit('d')),
    ])
    .unwrap_or_else(|e| panic!("end-to-end fixture is invalid: {e}"))
}
