//! Exclusion pattern settings
//!
//! Patterns come from an editor-style JSON settings file (the `files.exclude`
//! table) and from command-line overrides. The result is a flat
//! pattern → enabled table with no inheritance between entries.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};

/// Mapping from glob pattern to its enabled flag.
///
/// Absent patterns are not excluded, and disabled (`false`) patterns are
/// ignored. Kept ordered so that iteration is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExcludePatterns(BTreeMap<String, bool>);

impl ExcludePatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enabled flag for a pattern, replacing any earlier value.
    pub fn insert(&mut self, pattern: impl Into<String>, enabled: bool) {
        self.0.insert(pattern.into(), enabled);
    }

    pub fn enable(&mut self, pattern: impl Into<String>) {
        self.insert(pattern, true);
    }

    pub fn disable(&mut self, pattern: impl Into<String>) {
        self.insert(pattern, false);
    }

    pub fn is_enabled(&self, pattern: &str) -> bool {
        self.0.get(pattern).copied().unwrap_or(false)
    }

    /// Iterate over the enabled patterns only.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(pattern, _)| pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply command-line overrides: `enable` first, then `disable`, so a
    /// pattern named in both ends up disabled.
    pub fn with_overrides(mut self, enable: &[String], disable: &[String]) -> Self {
        for pattern in enable {
            self.enable(pattern.as_str());
        }
        for pattern in disable {
            self.disable(pattern.as_str());
        }
        self
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ExcludePatterns {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, e)| (p.into(), e)).collect())
    }
}

/// A `files.exclude` value: either a plain flag or a conditional object.
///
/// Conditional entries (`{ "when": "..." }`) are treated as enabled; the
/// sibling-file condition is not evaluated.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExcludeValue {
    Flag(bool),
    Conditional {
        #[allow(dead_code)]
        when: String,
    },
}

impl ExcludeValue {
    fn is_enabled(&self) -> bool {
        match self {
            ExcludeValue::Flag(enabled) => *enabled,
            ExcludeValue::Conditional { .. } => true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FilesSection {
    #[serde(default)]
    exclude: Option<BTreeMap<String, ExcludeValue>>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(rename = "files.exclude", default)]
    flat_exclude: Option<BTreeMap<String, ExcludeValue>>,
    #[serde(default)]
    files: Option<FilesSection>,
}

/// Parse exclusion patterns out of a settings document.
///
/// Both the dotted form (`"files.exclude": {...}`) and the nested form
/// (`"files": { "exclude": {...} }`) are accepted; when both are present the
/// dotted entries win. Unrelated settings are ignored.
pub fn parse_settings(content: &str) -> serde_json::Result<ExcludePatterns> {
    let settings: SettingsFile = serde_json::from_str(content)?;

    let mut patterns = ExcludePatterns::new();
    let nested = settings.files.and_then(|f| f.exclude);
    for table in [nested, settings.flat_exclude].into_iter().flatten() {
        for (pattern, value) in table {
            patterns.insert(pattern, value.is_enabled());
        }
    }
    Ok(patterns)
}

/// Load exclusion patterns from a settings file on disk.
pub fn load_settings(path: &Path) -> Result<ExcludePatterns> {
    let content = fs::read_to_string(path).map_err(|source| TreeError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = parse_settings(&content).map_err(|source| TreeError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} exclude pattern(s) from {}",
        patterns.len(),
        path.display()
    );
    Ok(patterns)
}
