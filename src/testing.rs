//! Testing utilities for generator and parser tests
//!
//! Two tools are provided:
//!
//! 1. **[fixtures]** - build ASTs by shape, without going through the parser. Useful
//!    when a test is about the generator and should not depend on parser details.
//! 2. **[assert_generated]** - a fluent assertion over the strings produced by a range
//!    of seeds.
//!
//! ```rust,ignore
//! use rxgen::testing::assert_generated;
//! use rxgen::testing::fixtures::{build_ast, class, repeat};
//!
//! let ast = build_ast(vec![repeat(2, Some(4), class('a', 'c'))])?;
//! assert_generated(&ast)
//!     .all_match("[a-c]{2,4}")
//!     .covers(&["aa", "cccc"]);
//! ```
//!
//! Sampling is seeded (`0..200` by default), so a failing assertion reproduces.
//! The seed of the offending sample is part of the panic message.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_generated, GenerationAssertion};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
