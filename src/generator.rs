//! Random string generation over a parsed pattern
//!
//! The generator walks the [`Ast`](crate::ast::Ast) from its roots and renders each
//! node into a string:
//!
//! - `Begin` / `End`: the children, in order
//! - `Alternative`: one child, picked uniformly
//! - `Block`: every child in order for a sub-pattern (`( )`), one child for a set (`[ ]`)
//! - `CharacterClass`: one character between the bounds, inclusive
//! - `Repetition`: the child rendered `n` times, `n` drawn from the bounds; unbounded
//!   quantifiers use `min..=min + unbounded_extra`
//! - `Token`: its literal text. Escapes render as nothing. A `.` renders as one
//!   character from `'Z'..='a'` unless it sits directly inside a set, where it is a
//!   plain dot.
//!
//! Every call owns its random source. With a seed, `StdRng::seed_from_u64` makes the
//! output reproducible; without one the source is seeded from OS entropy.

mod random;

pub use random::{generate, RandomGenerator, WILDCARD_RANGE};
