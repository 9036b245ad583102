//! HTTP handlers for the character endpoints.

pub mod characters;
pub use characters::*;
