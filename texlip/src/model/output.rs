//! Output store: lazily created destination files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use indexmap::IndexMap;

use super::language::{LanguageId, LanguageRegistry};
use crate::errors::Result;
use crate::io::create_output_file;

/// Handle to an output in an [`OutputStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputId(usize);

/// A destination file accumulating extracted lines.
#[derive(Debug)]
pub struct Output {
    /// Output name as given in the begin marker.
    pub name: String,
    /// Language the output was bound to on creation.
    pub language: LanguageId,
    /// Full path of the generated file.
    pub path: PathBuf,
    lineno: usize,
    writer: BufWriter<File>,
}

impl Output {
    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.lineno
    }

    fn write_comment(&mut self, registry: &LanguageRegistry, payload: &str) -> Result<()> {
        let comment = registry.get(self.language).comment(payload);
        writeln!(self.writer, "{}", comment)?;
        Ok(())
    }
}

/// All outputs created during a run, keyed by name.
#[derive(Debug)]
pub struct OutputStore {
    outputs: Vec<Output>,
    by_name: IndexMap<String, OutputId>,
    basedir: PathBuf,
    tag_source: Option<String>,
}

impl OutputStore {
    /// Creates an empty store writing below `basedir`.
    ///
    /// With `tag_source` set, the first line of each output is a comment
    /// naming the source document and the output.
    pub fn new(basedir: impl Into<PathBuf>, tag_source: Option<String>) -> Self {
        Self {
            outputs: Vec::new(),
            by_name: IndexMap::new(),
            basedir: basedir.into(),
            tag_source,
        }
    }

    /// Returns the output called `name`, creating it bound to `language`
    /// on first use.
    ///
    /// An existing output keeps its original language binding.
    pub fn resolve(
        &mut self,
        name: &str,
        language: LanguageId,
        registry: &mut LanguageRegistry,
    ) -> Result<OutputId> {
        if let Some(&id) = self.by_name.get(name) {
            return Ok(id);
        }

        let lang = registry.get_mut(language);
        let path = lang.output_dir(&self.basedir).join(name);
        let writer = create_output_file(&path)?;
        lang.total_files += 1;
        tracing::debug!("Created {} for language {}", path.display(), lang.name);

        let id = OutputId(self.outputs.len());
        self.outputs.push(Output {
            name: name.to_string(),
            language,
            path,
            lineno: 0,
            writer,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Appends `line` verbatim to an output and updates the statistics.
    pub fn write_line(
        &mut self,
        id: OutputId,
        line: &[u8],
        registry: &mut LanguageRegistry,
    ) -> Result<()> {
        let output = &mut self.outputs[id.0];
        if output.lineno == 0 {
            if let Some(source) = &self.tag_source {
                let tag = format!("{} -> {}", source, output.name);
                output.write_comment(registry, &tag)?;
            }
        }
        output.writer.write_all(line)?;
        output.lineno += 1;
        registry.get_mut(output.language).total_lines += 1;
        Ok(())
    }

    /// Flushes and closes every output.
    ///
    /// With `timestamp` set, each output that received lines gets a final
    /// comment carrying it.
    pub fn finish(self, registry: &LanguageRegistry, timestamp: Option<&str>) -> Result<()> {
        for mut output in self.outputs {
            if output.lineno > 0 {
                if let Some(stamp) = timestamp {
                    output.write_comment(registry, stamp)?;
                }
            }
            // into_inner flushes; dropping the file closes it.
            output.writer.into_inner().map_err(|e| e.into_error())?;
        }
        Ok(())
    }

    /// Looks up an output by name.
    pub fn lookup(&self, name: &str) -> Option<OutputId> {
        self.by_name.get(name).copied()
    }

    /// Returns the output behind an id.
    pub fn get(&self, id: OutputId) -> &Output {
        &self.outputs[id.0]
    }

    /// Returns true if no output has been created.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
