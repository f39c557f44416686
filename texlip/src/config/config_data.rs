//! Configuration data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::comment::DEFAULT_COMMENT;

/// A language registered before the document is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language name as used in begin/end markers.
    pub name: String,

    /// Comment template; the default template applies when absent.
    #[serde(default)]
    pub comment: Option<String>,
}

impl LanguageConfig {
    /// Creates a language entry with the default comment template.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    /// Sets the comment template.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Main configuration structure for texlip.
///
/// Handed to the engine once and never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for generated files.
    #[serde(default = "default_basedir")]
    pub basedir: PathBuf,

    /// Place each language's outputs in `<basedir>/<language>/`.
    #[serde(default)]
    pub lang_hier: bool,

    /// Write a provenance comment as the first line of each output.
    #[serde(default)]
    pub tag: bool,

    /// Write a timestamp comment as the last line of each non-empty output.
    #[serde(default)]
    pub timetag: bool,

    /// strftime-style format of the timestamp comment.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Comment template given to newly registered languages.
    #[serde(default = "default_comment")]
    pub default_comment: String,

    /// Languages registered before the first line is read.
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

fn default_basedir() -> PathBuf {
    PathBuf::from(".")
}

fn default_time_format() -> String {
    "[%T] %a, %d %b %Y".to_string()
}

fn default_comment() -> String {
    DEFAULT_COMMENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            basedir: default_basedir(),
            lang_hier: false,
            tag: false,
            timetag: false,
            time_format: default_time_format(),
            default_comment: default_comment(),
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Returns a copy writing into `basedir`.
    #[must_use]
    pub fn with_basedir(mut self, basedir: impl Into<PathBuf>) -> Self {
        self.basedir = basedir.into();
        self
    }
}
