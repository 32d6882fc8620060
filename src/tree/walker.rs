//! TreeWalker - builds the tree in memory for JSON output

use std::path::Path;

use super::config::TreeConfig;
use super::filter::ExcludeFilter;
use super::json_types::TreeNode;
use super::traversal::{Ancestors, Traversal};
use super::utils::root_name;

/// Tree walker that collects the same entries as `TreeBuilder` into a
/// `TreeNode` structure.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: &Path) -> TreeNode {
        let filter = ExcludeFilter::new(&self.config.exclude);
        let traversal = Traversal::new(root, self.config.include_files, &filter);
        let mut ancestors = Ancestors::new();

        let children = if ancestors.enter(root) {
            walk_dir(&traversal, root, &mut ancestors)
        } else {
            Vec::new()
        };

        TreeNode::Dir {
            name: root_name(root),
            path: root.to_path_buf(),
            children,
        }
    }
}

fn walk_dir(traversal: &Traversal<'_>, dir: &Path, ancestors: &mut Ancestors) -> Vec<TreeNode> {
    traversal
        .visible_entries(dir)
        .into_iter()
        .map(|entry| {
            let path = dir.join(&entry.file_name);
            if entry.is_dir {
                let children = if ancestors.enter(&path) {
                    let children = walk_dir(traversal, &path, ancestors);
                    ancestors.leave();
                    children
                } else {
                    Vec::new()
                };
                TreeNode::Dir {
                    name: entry.name,
                    path,
                    children,
                }
            } else {
                TreeNode::File {
                    name: entry.name,
                    path,
                }
            }
        })
        .collect()
}
