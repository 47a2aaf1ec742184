//! AST node type definitions
//!
//! The tree is stored as an arena. Every node records its children and its parent by
//! [`NodeId`]; the arena owns all nodes, so parent links never keep anything alive and
//! can only be used to look at the surrounding structure.
//!
//! Node types carry no generation policy. What a node means at generation time is decided
//! by the generator.

use super::error::ValidationError;
use crate::lexer::Token;
use std::fmt;

/// Index of a node inside its [`Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inclusive range between two literal boundary tokens.
///
/// Fields are private: a `CharacterClass` can only be obtained through [`CharacterClass::new`],
/// which guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    start: Token,
    end: Token,
}

impl CharacterClass {
    pub fn new(start: Token, end: Token) -> Result<Self, ValidationError> {
        let lo = start
            .literal_char()
            .ok_or(ValidationError::NonLiteralBoundary(start))?;
        let hi = end
            .literal_char()
            .ok_or(ValidationError::NonLiteralBoundary(end))?;
        if hi < lo {
            return Err(ValidationError::EmptyRange { start: lo, end: hi });
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from two plain characters
    pub fn from_chars(start: char, end: char) -> Result<Self, ValidationError> {
        Self::new(Token::Char(start), Token::Char(end))
    }

    pub fn start(&self) -> Token {
        self.start
    }

    pub fn end(&self) -> Token {
        self.end
    }

    /// The boundaries as characters
    pub fn bounds(&self) -> (char, char) {
        // Both boundaries were checked to be literal in `new`
        let lo = self.start.literal_char().unwrap_or('\0');
        let hi = self.end.literal_char().unwrap_or(lo);
        (lo, hi)
    }

    pub fn contains(&self, ch: char) -> bool {
        let (lo, hi) = self.bounds();
        lo <= ch && ch <= hi
    }
}

/// Repetition bounds. `max == None` means the quantifier is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    min: u32,
    max: Option<u32>,
}

impl Repetition {
    pub fn new(min: u32, max: Option<u32>) -> Result<Self, ValidationError> {
        match max {
            Some(max) if max < min => Err(ValidationError::InvertedBounds { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    pub fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    pub fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// The closed set of node variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Start of the pattern; holds the pattern body
    Begin,
    /// End of the pattern
    End,
    /// Mutually exclusive branches, exactly one is taken
    Alternative,
    /// Group of children. A sub-pattern is concatenated, otherwise one child is taken
    Block { is_sub_pattern: bool },
    CharacterClass(CharacterClass),
    Repetition(Repetition),
    /// Leaf wrapping a single lexical token
    Token(Token),
}

impl NodeKind {
    pub fn sub_pattern() -> Self {
        NodeKind::Block {
            is_sub_pattern: true,
        }
    }

    pub fn choice_block() -> Self {
        NodeKind::Block {
            is_sub_pattern: false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Begin => "begin",
            NodeKind::End => "end",
            NodeKind::Alternative => "alternative",
            NodeKind::Block { .. } => "block",
            NodeKind::CharacterClass(_) => "character-class",
            NodeKind::Repetition(_) => "repetition",
            NodeKind::Token(_) => "token",
        }
    }

    /// Leaves never own children
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Token(_) | NodeKind::CharacterClass(_))
    }

    /// Kinds whose children list may not be empty
    pub fn requires_children(&self) -> bool {
        matches!(self, NodeKind::Alternative | NodeKind::Block { .. })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Block { is_sub_pattern } => {
                write!(f, "block(sub_pattern={is_sub_pattern})")
            }
            NodeKind::CharacterClass(class) => {
                write!(f, "character-class({}-{})", class.start(), class.end())
            }
            NodeKind::Repetition(rep) => match rep.max() {
                Some(max) => write!(f, "repetition({},{})", rep.min(), max),
                None => write!(f, "repetition({},)", rep.min()),
            },
            NodeKind::Token(token) => write!(f, "token({})", token),
            other => f.write_str(other.name()),
        }
    }
}

/// A node in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An immutable, parent-consistent pattern tree.
///
/// Built by the parser or by [`super::AstBuilder`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
}

impl Ast {
    /// Top-level nodes, in order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The parent of a node, `None` for top-level nodes
    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.node(id).parent.map(|p| self.node(p))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Indented outline of the tree, one node per line
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.write_outline(*root, 0, &mut out);
        }
        out
    }

    fn write_outline(&self, id: NodeId, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.kind(id).to_string());
        out.push('\n');
        for child in self.children(id) {
            self.write_outline(*child, depth + 1, out);
        }
    }
}
