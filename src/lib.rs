//! # rxgen
//!
//! Random string generation from a restricted regular-expression dialect.
//!
//! A pattern is tokenized ([`lexer`]), parsed into an arena [`Ast`] ([`parser`]) and then
//! walked by the [`RandomGenerator`] ([`generator`]), which produces strings the pattern
//! would match:
//!
//! ```rust,ignore
//! let generator = rxgen::create("a(b|c)d{2,3}")?;
//! let sample = generator.generate(Some(7)); // e.g. "acddd", same for every run with seed 7
//! ```
//!
//! Escapes such as `\d` are accepted by the parser but generate nothing.
//!
//! ## Testing
//!
//! AST fixtures and sample assertions live in the [testing module](testing).

pub mod ast;
pub mod config;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::{Ast, NodeId, NodeKind};
pub use config::{GeneratorConfig, Loader, RxgenConfig};
pub use generator::{generate, RandomGenerator};
pub use parser::{parse, ParseError};

/// Parse `pattern` and return a generator for it.
pub fn create(pattern: &str) -> Result<RandomGenerator, ParseError> {
    RandomGenerator::create(pattern)
}
