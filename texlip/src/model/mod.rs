//! Core data model: the language registry and the output store.

mod language;
mod output;

pub use language::{Language, LanguageId, LanguageRegistry};
pub use output::{Output, OutputId, OutputStore};
