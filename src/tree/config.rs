//! Configuration types for tree generation

use crate::settings::ExcludePatterns;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// When false, only directories are rendered.
    pub include_files: bool,
    pub exclude: ExcludePatterns,
}

impl TreeConfig {
    pub fn new(include_files: bool, exclude: ExcludePatterns) -> Self {
        Self {
            include_files,
            exclude,
        }
    }

    pub fn folders_only() -> Self {
        Self {
            include_files: false,
            ..Default::default()
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            include_files: true,
            exclude: ExcludePatterns::new(),
        }
    }
}
