//! Configuration update and merging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_data::{Config, LanguageConfig};

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub basedir: Option<PathBuf>,

    #[serde(default)]
    pub lang_hier: Option<bool>,

    #[serde(default)]
    pub tag: Option<bool>,

    #[serde(default)]
    pub timetag: Option<bool>,

    #[serde(default)]
    pub time_format: Option<String>,

    #[serde(default)]
    pub default_comment: Option<String>,

    #[serde(default)]
    pub languages: Option<Vec<LanguageConfig>>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges this update into a base configuration, returning a new Config.
    ///
    /// Consumes `self` so fields can be moved instead of cloned.
    pub fn merge_into(self, base: &Config) -> Config {
        Config {
            basedir: self.basedir.unwrap_or_else(|| base.basedir.clone()),
            lang_hier: self.lang_hier.unwrap_or(base.lang_hier),
            tag: self.tag.unwrap_or(base.tag),
            timetag: self.timetag.unwrap_or(base.timetag),
            time_format: self
                .time_format
                .unwrap_or_else(|| base.time_format.clone()),
            default_comment: self
                .default_comment
                .unwrap_or_else(|| base.default_comment.clone()),
            languages: merge_languages(
                &base.languages,
                self.languages.as_deref().unwrap_or_default(),
            ),
        }
    }
}

/// Merge language lists, with update languages replacing base languages of the same name.
fn merge_languages(base: &[LanguageConfig], update: &[LanguageConfig]) -> Vec<LanguageConfig> {
    let mut result = base.to_vec();

    for lang in update {
        result.retain(|l| l.name != lang.name);
        result.push(lang.clone());
    }

    result
}
