//! The extraction engine.
//!
//! A single forward pass over the document. Each line is first offered to
//! the directive parser, then to the marker scanner; what remains is copied
//! byte for byte into the active output, if any.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::stats::Statistics;
use crate::config::{CommentFormat, Config};
use crate::errors::{Result, TexlipError};
use crate::io::ensure_dir;
use crate::model::{LanguageRegistry, OutputId, OutputStore};
use crate::readers::{scan_marker, BlockMarker, Directive};
use crate::text_location::TextLocation;

/// Where the scan currently routes plain lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Plain lines are discarded.
    Idle,
    /// Plain lines are appended to this output.
    InBlock(OutputId),
}

/// Extraction session over one input document.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    source_name: String,
    source_path: Option<PathBuf>,
    registry: LanguageRegistry,
    outputs: OutputStore,
    state: ScanState,
}

impl Engine {
    /// Creates an engine for the document called `source_name`.
    ///
    /// Fails if the configured default comment template or time format is
    /// unusable. Nothing is written until [`Engine::prepare`].
    pub fn new(config: Config, source_name: impl Into<String>) -> Result<Self> {
        let default_comment = CommentFormat::parse(&config.default_comment).ok_or_else(|| {
            TexlipError::Config(format!(
                "default comment format {:?} has no COMMENT marker",
                config.default_comment
            ))
        })?;
        format_timestamp(&config.time_format)?;

        let source_name = source_name.into();
        let tag_source = config.tag.then(|| source_name.clone());
        let registry =
            LanguageRegistry::new(&config.basedir, config.lang_hier, default_comment);
        let outputs = OutputStore::new(&config.basedir, tag_source);

        Ok(Self {
            config,
            source_name,
            source_path: None,
            registry,
            outputs,
            state: ScanState::Idle,
        })
    }

    /// Attaches the document path used in error locations.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Creates the base directory and registers the configured languages.
    pub fn prepare(&mut self) -> Result<()> {
        ensure_dir(&self.config.basedir)?;

        for lang in &self.config.languages {
            let id = self.registry.register(&lang.name)?;
            if let Some(template) = &lang.comment {
                let format = CommentFormat::parse(template).ok_or_else(|| {
                    TexlipError::Config(format!(
                        "comment format {:?} of language {} has no COMMENT marker",
                        template, lang.name
                    ))
                })?;
                self.registry.get_mut(id).comment = format;
            }
        }
        Ok(())
    }

    fn location(&self, line_number: usize) -> TextLocation {
        match &self.source_path {
            Some(path) => TextLocation::file_line(path.clone(), line_number),
            None => TextLocation::line_only(line_number),
        }
    }

    /// Processes one line, terminator included.
    pub fn process_line(&mut self, line: &[u8], line_number: usize) -> Result<()> {
        match Directive::parse(line) {
            Ok(Some(directive)) => return self.apply(directive, line_number),
            Ok(None) => {}
            Err(message) => {
                return Err(TexlipError::Parse {
                    location: self.location(line_number),
                    message,
                })
            }
        }

        match scan_marker(line, &self.registry) {
            Some(BlockMarker::End { language }) => match self.state {
                ScanState::InBlock(id) => {
                    self.outputs.write_line(id, b"\n", &mut self.registry)?;
                    self.state = ScanState::Idle;
                    tracing::debug!("[{}] end of block", self.outputs.get(id).name);
                }
                ScanState::Idle => {
                    tracing::warn!(
                        "Ignoring \\end{{{}}} outside of a block at {}",
                        language,
                        self.location(line_number)
                    );
                }
            },
            Some(BlockMarker::Begin { output, language }) => {
                let lang = self.registry.lookup(language).ok_or_else(|| {
                    TexlipError::UnknownLanguage {
                        location: self.location(line_number),
                        name: language.to_string(),
                    }
                })?;
                let name = String::from_utf8_lossy(output);
                let id = self.outputs.resolve(&name, lang, &mut self.registry)?;
                self.state = ScanState::InBlock(id);
                tracing::debug!(
                    "[{}, line {}] block starts",
                    name,
                    self.outputs.get(id).line_count()
                );
            }
            None => {
                if let ScanState::InBlock(id) = self.state {
                    self.outputs.write_line(id, line, &mut self.registry)?;
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, directive: Directive, line_number: usize) -> Result<()> {
        match directive {
            Directive::Register(name) => {
                if !self.registry.contains(&name) {
                    self.registry.register(&name)?;
                    tracing::debug!("Added language \"{}\"", name);
                }
            }
            Directive::Unregister(name) => {
                if self.registry.unregister(&name).is_some() {
                    tracing::debug!("Removed language \"{}\"", name);
                }
            }
            Directive::SetCommentFormat { language, format } => {
                let parsed = CommentFormat::parse(&format).ok_or_else(|| {
                    TexlipError::InvalidCommentFormat {
                        location: self.location(line_number),
                        format: format.clone(),
                    }
                })?;
                self.registry
                    .set_comment_format(&language, parsed)
                    .ok_or_else(|| TexlipError::UnknownLanguage {
                        location: self.location(line_number),
                        name: language.clone(),
                    })?;
                tracing::debug!(
                    "Set comment format to \"{}\" for language \"{}\"",
                    format,
                    language
                );
            }
        }
        Ok(())
    }

    /// Closes every output and returns the final statistics.
    ///
    /// Runs from whatever state the scan ended in; an unterminated block is
    /// closed without its end-of-block newline.
    pub fn finish(self) -> Result<Statistics> {
        let timestamp = if self.config.timetag {
            Some(format_timestamp(&self.config.time_format)?)
        } else {
            None
        };
        self.outputs.finish(&self.registry, timestamp.as_deref())?;
        Ok(Statistics::from_registry(&self.registry))
    }

    /// Runs the whole pass over `text`.
    ///
    /// The document is handled as raw bytes; block content reaches the
    /// outputs unchanged whatever its encoding.
    pub fn run(mut self, text: &[u8]) -> Result<Statistics> {
        tracing::info!("Running texlip on \"{}\"", self.source_name);
        self.prepare()?;
        for (index, line) in text.split_inclusive(|&b| b == b'\n').enumerate() {
            self.process_line(line, index + 1)?;
        }
        self.finish()
    }

    /// Current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The language registry as of the current line.
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Outputs created so far.
    pub fn outputs(&self) -> &OutputStore {
        &self.outputs
    }
}

/// Formats the current local time, rejecting invalid format strings.
fn format_timestamp(format: &str) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", chrono::Local::now().format(format))
        .map_err(|_| TexlipError::Config(format!("invalid time format {:?}", format)))?;
    Ok(stamp)
}

/// Extracts all blocks of `text`, naming the document `source_name` in tags.
pub fn tangle_str(config: Config, source_name: &str, text: &str) -> Result<Statistics> {
    Engine::new(config, source_name)?.run(text.as_bytes())
}

/// Reads and extracts the document at `path`.
pub fn tangle_file(config: Config, path: impl AsRef<Path>) -> Result<Statistics> {
    let path = path.as_ref();
    let text = fs::read(path)?;
    Engine::new(config, path.display().to_string())?
        .with_source_path(path)
        .run(&text)
}
