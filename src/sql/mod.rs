//! Parameterized SQL for the characters table: identifiers are fixed, values are bound.

mod builder;
pub use builder::*;
