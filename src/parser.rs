//! Parser module for the pattern dialect
//!
//! Parsing runs in two steps. The chumsky combinators in `combinators` turn the token
//! stream into an owned expression tree carrying byte spans. `ast_conversion` then
//! lowers that tree into the arena [`Ast`](crate::ast::Ast), validating character
//! classes and repetition bounds on the way.
//!
//! Supported syntax: literals, `.`, escapes (kept, but they generate nothing), `|`,
//! `( )`, `[ ]` with `a-z` ranges, `*`, `+`, `?`, `{n}`, `{n,}`, `{n,m}`, and the
//! `^` / `$` anchors at the very start and end of the pattern.
//!
//! Brace bounds are capped at 10000. Nested quantifiers still multiply, so
//! `(x{10000}){10000}` asks the generator for a hundred million characters.

pub mod api;
mod ast_conversion;
mod combinators;
pub mod error;
mod intermediate_ast;
#[cfg(test)]
mod tests;

pub use api::{parse, parse_tokens};
pub use error::ParseError;
