//! Texlip - literate programming block extractor
//!
//! This library extracts named output streams embedded in an annotated TeX
//! document and writes each of them to its own file.
//!
//! # Document syntax
//!
//! - `%texlip: +lang` registers a language, `%texlip: -lang` removes it and
//!   `%texlip: #lang#// COMMENT` changes its comment format.
//! - `\begin[out.c]{lang}` starts routing lines into `out.c`,
//!   `\end{lang}` stops it.
//!
//! # Example
//!
//! ```no_run
//! use texlip::{tangle_file, Config};
//!
//! let stats = tangle_file(Config::default(), "paper.tex").unwrap();
//! print!("{}", stats);
//! ```

pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod text_location;

// Re-export commonly used types
pub use config::{CommentFormat, Config};
pub use errors::{Result, TexlipError};
pub use interface::{tangle_file, tangle_str, Engine, LanguageStats, Statistics};
pub use model::{Language, LanguageId, LanguageRegistry, Output, OutputId, OutputStore};
