//! Literal markers recognized in the input document.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Prefix of every directive line.
pub const DIRECTIVE_PREFIX: &str = "%texlip: ";

/// Separator between language name and format in a set-format directive.
pub const FORMAT_SEPARATOR: char = '#';

/// Pattern for begin markers: `\begin[output]{lang}`.
///
/// The language is captured generically and checked against the registry
/// by the caller. The output name is matched greedily.
pub static BEGIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^\\begin\[(?P<output>.*)\]\{(?P<lang>[^}\n]*)\}").unwrap()
});

/// Pattern for end markers: `\end{lang}`.
pub static END_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)^\\end\{(?P<lang>[^}\n]*)\}").unwrap());
