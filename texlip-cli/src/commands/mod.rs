//! CLI command implementations.

pub mod tangle;

pub use tangle::{tangle, TangleOptions};
