//! Begin/end marker detection against the live language registry.

use crate::config::{BEGIN_PATTERN, END_PATTERN};
use crate::model::LanguageRegistry;

/// A block marker found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker<'a> {
    /// `\begin[output]{language}`
    Begin { output: &'a [u8], language: &'a str },
    /// `\end{language}`
    End { language: &'a str },
}

/// Returns `name` if it is valid UTF-8 and currently registered.
fn registered<'a>(name: &'a [u8], registry: &LanguageRegistry) -> Option<&'a str> {
    std::str::from_utf8(name)
        .ok()
        .filter(|name| registry.contains(name))
}

/// Looks for a block marker at the start of `line`, matching only the
/// languages registered at the time of the call.
///
/// Language names containing `}` never match.
pub fn scan_marker<'a>(line: &'a [u8], registry: &LanguageRegistry) -> Option<BlockMarker<'a>> {
    if let Some(caps) = END_PATTERN.captures(line) {
        if let Some(language) = caps.name("lang").and_then(|m| registered(m.as_bytes(), registry)) {
            return Some(BlockMarker::End { language });
        }
    }

    // The output name is greedy: try the last `]{lang}` first, then
    // retry on the text before it until a registered language matches.
    let mut haystack = line;
    while let Some(caps) = BEGIN_PATTERN.captures(haystack) {
        let (Some(output), Some(lang)) = (caps.name("output"), caps.name("lang")) else {
            break;
        };
        if let Some(language) = registered(lang.as_bytes(), registry) {
            return Some(BlockMarker::Begin {
                output: output.as_bytes(),
                language,
            });
        }
        haystack = &haystack[..output.end()];
    }

    None
}
