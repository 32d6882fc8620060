//! Directory tree generation
//!
//! The pieces compose in one direction: `TreeBuilder` asks the entry lister
//! for each directory's children, and the lister consults `ExcludeFilter` for
//! every child.
//!
//! - `TreeBuilder`: renders the box-drawing text
//! - `TreeWalker`: collects the same entries into a `TreeNode` for JSON

mod builder;
mod config;
mod entries;
mod filter;
mod json_types;
mod traversal;
mod utils;
mod walker;

pub use builder::{TreeBuilder, build_tree, generate_tree};
pub use config::TreeConfig;
pub use entries::{DirEntry, list_entries, sort_entries};
pub use filter::{ExcludeFilter, compile_pattern, matches_pattern, pattern_to_regex};
pub use json_types::TreeNode;
pub use utils::{
    LAST_CONNECTOR, LAST_CONTINUATION, MIDDLE_CONNECTOR, MIDDLE_CONTINUATION, child_prefix,
    connector, relative_path, root_name,
};
pub use walker::TreeWalker;
