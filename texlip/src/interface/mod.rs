//! High-level interface: the extraction engine and its statistics.

mod engine;
mod stats;

pub use engine::{tangle_file, tangle_str, Engine, ScanState};
pub use stats::{LanguageStats, Statistics};
