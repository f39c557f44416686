//! Per-language line and file statistics.

use std::fmt;

use serde::Serialize;

use crate::errors::Result;
use crate::model::LanguageRegistry;

/// Totals for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub name: String,
    pub files: usize,
    pub lines: usize,
}

/// Statistics of a finished run, one entry per registered language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub languages: Vec<LanguageStats>,
}

impl Statistics {
    /// Collects the totals of the languages registered at the end of the run,
    /// in registration order.
    pub fn from_registry(registry: &LanguageRegistry) -> Self {
        let languages = registry
            .registered()
            .map(|lang| LanguageStats {
                name: lang.name.clone(),
                files: lang.total_files,
                lines: lang.total_lines,
            })
            .collect();
        Self { languages }
    }

    /// Looks up the totals of one language.
    pub fn language(&self, name: &str) -> Option<&LanguageStats> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn total_files(&self) -> usize {
        self.languages.iter().map(|l| l.files).sum()
    }

    pub fn total_lines(&self) -> usize {
        self.languages.iter().map(|l| l.lines).sum()
    }

    /// Renders the statistics, totals included, as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let value = serde_json::json!({
            "languages": self.languages,
            "total_files": self.total_files(),
            "total_lines": self.total_lines(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, files: usize, lines: usize, what: &str) -> fmt::Result {
    writeln!(
        f,
        "{} file{} and {} line{} in {}.",
        files,
        plural(files),
        lines,
        plural(lines),
        what
    )
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lang in &self.languages {
            write_counts(f, lang.files, lang.lines, &lang.name)?;
        }
        write_counts(f, self.total_files(), self.total_lines(), "total")
    }
}
