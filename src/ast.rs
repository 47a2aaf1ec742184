//! AST definitions for patterns
//!
//! ## Modules
//!
//! - `node` - node kinds, the arena [`Ast`] and its read-only accessors
//! - `builder` - [`AstBuilder`], the only way to assemble a tree
//! - `error` - validation errors raised while building

pub mod builder;
pub mod error;
pub mod node;

pub use builder::AstBuilder;
pub use error::ValidationError;
pub use node::{Ast, CharacterClass, Node, NodeId, NodeKind, Repetition};
