//! Language registry.
//!
//! Languages are kept in an arena addressed by [`LanguageId`]. The live
//! name table only holds currently registered languages, so removing a
//! language never invalidates the outputs already bound to it.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::CommentFormat;
use crate::errors::Result;
use crate::io::ensure_dir;

/// Handle to a language in a [`LanguageRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageId(usize);

/// A named category of blocks with its own comment format and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Language name as used in begin/end markers.
    pub name: String,
    /// Comment format for generated lines.
    pub comment: CommentFormat,
    /// Directory (relative to the base directory) holding this language's outputs.
    pub prefix: PathBuf,
    /// Lines written to outputs bound to this language.
    pub total_lines: usize,
    /// Outputs bound to this language.
    pub total_files: usize,
}

impl Language {
    /// Creates a language with zeroed statistics.
    pub fn new(name: impl Into<String>, comment: CommentFormat, prefix: PathBuf) -> Self {
        Self {
            name: name.into(),
            comment,
            prefix,
            total_lines: 0,
            total_files: 0,
        }
    }

    /// Wraps `payload` in this language's comment format.
    pub fn comment(&self, payload: &str) -> String {
        self.comment.render(payload)
    }

    /// Directory where outputs of this language are placed.
    pub fn output_dir(&self, basedir: &Path) -> PathBuf {
        if self.prefix.as_os_str().is_empty() {
            basedir.to_path_buf()
        } else {
            basedir.join(&self.prefix)
        }
    }
}

/// Registry of languages known at the current point of the scan.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    live: IndexMap<String, LanguageId>,
    basedir: PathBuf,
    lang_hier: bool,
    default_comment: CommentFormat,
}

impl LanguageRegistry {
    /// Creates an empty registry.
    ///
    /// With `lang_hier` set, registering a language creates
    /// `<basedir>/<name>` and routes its outputs there.
    pub fn new(basedir: impl Into<PathBuf>, lang_hier: bool, default_comment: CommentFormat) -> Self {
        Self {
            languages: Vec::new(),
            live: IndexMap::new(),
            basedir: basedir.into(),
            lang_hier,
            default_comment,
        }
    }

    /// Registers a language, returning its id.
    ///
    /// Registering a name that is already live is a no-op. A name that was
    /// removed earlier gets a fresh language with zeroed statistics.
    pub fn register(&mut self, name: &str) -> Result<LanguageId> {
        if let Some(&id) = self.live.get(name) {
            return Ok(id);
        }

        let prefix = if self.lang_hier {
            ensure_dir(&self.basedir.join(name))?;
            PathBuf::from(name)
        } else {
            PathBuf::new()
        };

        let id = LanguageId(self.languages.len());
        self.languages
            .push(Language::new(name, self.default_comment.clone(), prefix));
        self.live.insert(name.to_string(), id);
        Ok(id)
    }

    /// Removes a language from the live table. Unknown names are ignored.
    pub fn unregister(&mut self, name: &str) -> Option<LanguageId> {
        self.live.shift_remove(name)
    }

    /// Replaces the comment format of a registered language, returning the
    /// previous format, or `None` if `name` is not registered.
    pub fn set_comment_format(
        &mut self,
        name: &str,
        format: CommentFormat,
    ) -> Option<CommentFormat> {
        let id = self.lookup(name)?;
        Some(std::mem::replace(&mut self.languages[id.0].comment, format))
    }

    /// Renders a comment in the format of a registered language.
    pub fn comment(&self, name: &str, payload: &str) -> Option<String> {
        self.lookup(name).map(|id| self.get(id).comment(payload))
    }

    /// Looks up a registered language by name.
    pub fn lookup(&self, name: &str) -> Option<LanguageId> {
        self.live.get(name).copied()
    }

    /// Returns true if `name` is currently registered.
    pub fn contains(&self, name: &str) -> bool {
        self.live.contains_key(name)
    }

    /// Returns the language behind an id, registered or not.
    pub fn get(&self, id: LanguageId) -> &Language {
        &self.languages[id.0]
    }

    /// Mutable access to the language behind an id.
    pub fn get_mut(&mut self, id: LanguageId) -> &mut Language {
        &mut self.languages[id.0]
    }

    /// Registered languages in registration order.
    pub fn registered(&self) -> impl Iterator<Item = &Language> {
        self.live.values().map(|&id| &self.languages[id.0])
    }

    /// Returns the number of registered languages.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no language is registered.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
