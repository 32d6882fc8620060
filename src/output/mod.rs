//! Rendering the generated tree into its final artifact
//!
//! - `config` - output format and terminal options
//! - `markdown` - fenced markdown wrapper around the tree text
//! - `json` - serialized `TreeNode` structure
//! - `console` - colored terminal printing

mod config;
mod console;
mod json;
mod markdown;

use std::path::Path;

use crate::error::Result;
use crate::tree::{TreeConfig, TreeWalker, generate_tree};

pub use config::{OutputConfig, OutputFormat};
pub use console::{print_error, print_result, write_tree};
pub use json::to_json;
pub use markdown::to_markdown;

/// Generate the tree for `root` and render it in the requested format.
pub fn render(root: &Path, config: &TreeConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_tree(root, config)),
        OutputFormat::Markdown => Ok(to_markdown(&generate_tree(root, config))),
        OutputFormat::Json => to_json(&TreeWalker::new(config.clone()).walk(root)),
    }
}
