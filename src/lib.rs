//! Explorer Tree - render a folder as a box-drawing tree, honoring exclude patterns

pub mod error;
pub mod host;
pub mod output;
pub mod settings;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use host::{GenerateRequest, Host, Mode, Outcome, generate};
pub use output::{OutputConfig, OutputFormat, render};
pub use settings::{ExcludePatterns, load_settings, parse_settings};
pub use tree::{
    DirEntry, ExcludeFilter, TreeBuilder, TreeConfig, TreeNode, TreeWalker, build_tree,
    generate_tree, list_entries, matches_pattern,
};
