//! Directive parsing.
//!
//! Directives are lines of the form `%texlip: +name`, `%texlip: -name` or
//! `%texlip: #name#format`. They change the language registry and are never
//! copied into any output.

use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::one_of,
    combinator::rest,
    sequence::preceded,
};

use crate::config::{DIRECTIVE_PREFIX, FORMAT_SEPARATOR};

/// A parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `+name`: register a language.
    Register(String),
    /// `-name`: remove a language.
    Unregister(String),
    /// `#name#format`: change a language's comment format.
    SetCommentFormat { language: String, format: String },
}

/// Strips a trailing `\n` or `\r\n` from a line.
pub fn trim_line_end(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(stripped) => stripped.strip_suffix(b"\r").unwrap_or(stripped),
        None => line,
    }
}

/// Parse the prefix and command character, returning the argument.
fn parse_command(input: &[u8]) -> IResult<&[u8], (char, &[u8])> {
    preceded(tag(DIRECTIVE_PREFIX.as_bytes()), (one_of("+-#"), rest)).parse(input)
}

impl Directive {
    /// Parses a document line.
    ///
    /// Returns `Ok(None)` if the line is not a directive, and an error
    /// message if it is one but its argument is malformed. Arguments must
    /// be valid UTF-8.
    pub fn parse(line: &[u8]) -> Result<Option<Self>, String> {
        let Ok((_, (command, arg))) = parse_command(trim_line_end(line)) else {
            return Ok(None);
        };
        let arg = std::str::from_utf8(arg)
            .map_err(|e| format!("directive argument is not valid UTF-8: {}", e))?;

        let directive = match command {
            '+' => Directive::Register(language_name(arg)?),
            '-' => Directive::Unregister(language_name(arg)?),
            _ => {
                let Some((language, format)) = arg.split_once(FORMAT_SEPARATOR) else {
                    return Err(format!(
                        "expected '{0}<language>{0}<format>', got '{0}{1}'",
                        FORMAT_SEPARATOR, arg
                    ));
                };
                if format.contains(FORMAT_SEPARATOR) {
                    return Err(format!(
                        "comment format '{}' must not contain '{}'",
                        format, FORMAT_SEPARATOR
                    ));
                }
                Directive::SetCommentFormat {
                    language: language_name(language)?,
                    format: format.to_string(),
                }
            }
        };
        Ok(Some(directive))
    }
}

fn language_name(arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err("missing language name".to_string())
    } else {
        Ok(arg.to_string())
    }
}
