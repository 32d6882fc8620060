//! TreeBuilder - renders a directory subtree as box-drawing text

use std::path::Path;

use super::config::TreeConfig;
use super::filter::ExcludeFilter;
use super::traversal::{Ancestors, Traversal};
use super::utils::{child_prefix, connector, root_name};

/// Renders directory subtrees line by line in depth-first pre-order.
pub struct TreeBuilder<'a> {
    traversal: Traversal<'a>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(root: &'a Path, include_files: bool, filter: &'a ExcludeFilter) -> Self {
        Self {
            traversal: Traversal::new(root, include_files, filter),
        }
    }

    #[cfg(test)]
    fn with_lister(mut self, lister: super::traversal::Lister) -> Self {
        self.traversal = self.traversal.with_lister(lister);
        self
    }

    /// Render the subtree of `dir`, without a line for `dir` itself.
    ///
    /// Every line starts with `prefix`. Unreadable directories render as
    /// empty, so this never fails.
    pub fn build(&self, dir: &Path, prefix: &str) -> String {
        let mut ancestors = Ancestors::new();
        if !ancestors.enter(dir) {
            return String::new();
        }
        self.build_dir(dir, prefix, &mut ancestors)
    }

    fn build_dir(&self, dir: &Path, prefix: &str, ancestors: &mut Ancestors) -> String {
        let entries = self.traversal.visible_entries(dir);
        let total = entries.len();
        let mut result = String::new();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;

            result.push_str(prefix);
            result.push_str(connector(is_last));
            result.push_str(&entry.name);
            result.push('\n');

            if entry.is_dir {
                let entry_path = dir.join(&entry.file_name);
                if ancestors.enter(&entry_path) {
                    let new_prefix = child_prefix(prefix, is_last);
                    result.push_str(&self.build_dir(&entry_path, &new_prefix, ancestors));
                    ancestors.leave();
                }
            }
        }

        result
    }
}

/// Render the subtree of `dir` relative to traversal root `root`.
pub fn build_tree(
    dir: &Path,
    prefix: &str,
    include_files: bool,
    root: &Path,
    filter: &ExcludeFilter,
) -> String {
    TreeBuilder::new(root, include_files, filter).build(dir, prefix)
}

/// Render the full tree for `root`: its name on the first line, then the
/// nested entries.
pub fn generate_tree(root: &Path, config: &TreeConfig) -> String {
    let filter = ExcludeFilter::new(&config.exclude);
    log::debug!(
        "generating tree for {} (include_files={})",
        root.display(),
        config.include_files
    );
    let body = build_tree(root, "", config.include_files, root, &filter);
    format!("{}\n{}", root_name(root), body)
}
