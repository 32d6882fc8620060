//! Exclusion pattern matching
//!
//! Patterns use a deliberately small glob subset: `*` matches any run of
//! characters (path separators included), `?` matches exactly one character,
//! and everything else is literal. Matches are anchored at both ends.

use regex::Regex;

use crate::settings::ExcludePatterns;

/// Translate a glob pattern into an anchored regular expression.
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut re = String::with_capacity(pattern.len() + 8);
    // (?s) lets `.` cross newlines, which can appear in file names
    re.push_str("(?s)^");
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            _ => re.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    re.push('$');
    re
}

/// Compile a glob pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&pattern_to_regex(pattern))
}

/// Check whether a single candidate string matches a glob pattern.
pub fn matches_pattern(candidate: &str, pattern: &str) -> bool {
    compile_pattern(pattern)
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

/// Compiled set of the enabled exclusion patterns for one run.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Regex>,
}

impl ExcludeFilter {
    /// Compile every enabled pattern. Disabled patterns are dropped here so
    /// the per-entry check only sees what is actually in force.
    pub fn new(patterns: &ExcludePatterns) -> Self {
        let patterns = patterns
            .enabled()
            .filter_map(|pattern| match compile_pattern(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("skipping exclude pattern '{}': {}", pattern, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// An entry is excluded when a pattern matches its root-relative path or
    /// its bare name.
    pub fn is_excluded(&self, relative_path: &str, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|re| re.is_match(relative_path) || re.is_match(name))
    }
}
