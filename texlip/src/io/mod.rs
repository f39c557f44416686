//! File system helpers.

mod fs;

pub use fs::{create_output_file, ensure_dir};
