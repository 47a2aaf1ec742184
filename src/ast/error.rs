//! Error types for AST construction

use crate::lexer::Token;
use thiserror::Error;

/// Structural preconditions violated while building an AST.
///
/// Trees are validated when they are built, so the generator never sees a reversed
/// character class or inverted repetition bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Character class whose end sorts before its start, e.g. `[z-a]`
    #[error("character class `{start}-{end}` is empty: `{end}` sorts before `{start}`")]
    EmptyRange { start: char, end: char },

    /// Character class boundary that is not a single literal character
    #[error("character class boundary `{0}` is not a literal character")]
    NonLiteralBoundary(Token),

    /// Repetition whose maximum is below its minimum, e.g. `{3,1}`
    #[error("repetition bounds {{{min},{max}}} are inverted")]
    InvertedBounds { min: u32, max: u32 },

    /// Alternative or block without children
    #[error("{kind} node must have at least one child")]
    EmptyNode { kind: &'static str },

    /// Attempt to attach a child to a token or character class
    #[error("{kind} node cannot have children")]
    LeafParent { kind: &'static str },

    /// Node id that does not belong to the tree being built
    #[error("node #{0} does not exist")]
    UnknownNode(usize),
}
