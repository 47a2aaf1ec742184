//! Lowering of the intermediate expression tree into the arena AST
//!
//! Shape rules:
//! - the pattern body goes under `Begin`, followed by an empty `End`
//! - a single branch puts its elements straight into the parent
//! - several branches become an `Alternative`; a branch with more than one element is
//!   wrapped in a sub-pattern `Block`
//! - `( ... )` is a sub-pattern `Block`, `[ ... ]` a choice `Block`
//! - a quantified atom becomes a `Repetition` owning the atom

use super::error::ParseError;
use super::intermediate_ast::{Branch, Expr, PatternExpr, SetItem};
use crate::ast::{Ast, AstBuilder, CharacterClass, NodeId, NodeKind, Repetition};
use crate::lexer::Span;

pub(crate) fn convert_pattern(pattern: PatternExpr) -> Result<Ast, ParseError> {
    let mut lowering = Lowering {
        builder: AstBuilder::new(),
    };
    let span = pattern.span.clone();

    let begin = lowering.builder.root(NodeKind::Begin);
    lowering.alternation(pattern.branches, begin, &span)?;
    lowering.builder.root(NodeKind::End);

    lowering
        .builder
        .finish()
        .map_err(|source| ParseError::Invalid { source, span })
}

struct Lowering {
    builder: AstBuilder,
}

impl Lowering {
    fn push(&mut self, kind: NodeKind, parent: NodeId, span: &Span) -> Result<NodeId, ParseError> {
        self.builder
            .push(kind, Some(parent))
            .map_err(|source| ParseError::Invalid {
                source,
                span: span.clone(),
            })
    }

    fn alternation(
        &mut self,
        mut branches: Vec<Branch>,
        parent: NodeId,
        span: &Span,
    ) -> Result<(), ParseError> {
        if branches.len() == 1 {
            for expr in branches.remove(0) {
                self.expr(expr, parent)?;
            }
            return Ok(());
        }

        let alternative = self.push(NodeKind::Alternative, parent, span)?;
        for mut branch in branches {
            match branch.len() {
                0 => return Err(ParseError::syntax("empty alternative branch", span.clone())),
                1 => self.expr(branch.remove(0), alternative)?,
                _ => {
                    let block = self.push(NodeKind::sub_pattern(), alternative, span)?;
                    for expr in branch {
                        self.expr(expr, block)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn expr(&mut self, expr: Expr, parent: NodeId) -> Result<(), ParseError> {
        match expr {
            Expr::Token(token, span) => {
                self.push(NodeKind::Token(token), parent, &span)?;
            }
            Expr::Group { branches, span } => {
                let block = self.push(NodeKind::sub_pattern(), parent, &span)?;
                self.alternation(branches, block, &span)?;
                if self.builder.child_count(block) == 0 {
                    return Err(ParseError::syntax("empty group", span));
                }
            }
            Expr::Set {
                negated,
                items,
                span,
            } => {
                if negated {
                    return Err(ParseError::Unsupported {
                        construct: "negated character set",
                        span,
                    });
                }
                let block = self.push(NodeKind::choice_block(), parent, &span)?;
                for item in items {
                    match item {
                        SetItem::Token(token) => {
                            self.push(NodeKind::Token(token), block, &span)?;
                        }
                        SetItem::Range(start, end, range_span) => {
                            let class = CharacterClass::new(start, end).map_err(|source| {
                                ParseError::Invalid {
                                    source,
                                    span: range_span.clone(),
                                }
                            })?;
                            self.push(NodeKind::CharacterClass(class), block, &range_span)?;
                        }
                    }
                }
            }
            Expr::Repeat {
                inner,
                min,
                max,
                span,
            } => {
                let repetition =
                    Repetition::new(min, max).map_err(|source| ParseError::Invalid {
                        source,
                        span: span.clone(),
                    })?;
                let node = self.push(NodeKind::Repetition(repetition), parent, &span)?;
                self.expr(*inner, node)?;
            }
        }
        Ok(())
    }
}
