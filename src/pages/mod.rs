//! Pages
//!
//! Top-level page components.

pub mod clashes;

pub use clashes::Clashes;
