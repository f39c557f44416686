//! Comment formats for generated lines.

/// Substitution point inside a comment template.
pub const COMMENT_MARKER: &str = "COMMENT";

/// Word placed in front of every generated comment payload.
pub const COMMENT_TAG: &str = "texlip: ";

/// Default comment template for newly registered languages.
pub const DEFAULT_COMMENT: &str = "# COMMENT";

/// A comment template split around its substitution point.
///
/// `"/* COMMENT */"` renders `payload` as `"/* texlip: payload */"`. Only the
/// first marker is substituted; any later occurrence is kept literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFormat {
    prefix: String,
    suffix: String,
}

impl CommentFormat {
    /// Parses a template, returning `None` if it has no substitution point.
    pub fn parse(template: &str) -> Option<Self> {
        let (prefix, suffix) = template.split_once(COMMENT_MARKER)?;
        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Builds a complete comment line (without terminator) around `payload`.
    pub fn render(&self, payload: &str) -> String {
        format!("{}{}{}{}", self.prefix, COMMENT_TAG, payload, self.suffix)
    }

    /// Returns the template this format was parsed from.
    pub fn template(&self) -> String {
        format!("{}{}{}", self.prefix, COMMENT_MARKER, self.suffix)
    }
}

impl Default for CommentFormat {
    fn default() -> Self {
        Self {
            prefix: "# ".to_string(),
            suffix: String::new(),
        }
    }
}
