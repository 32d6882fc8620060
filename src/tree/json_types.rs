//! Serializable tree structure for JSON output

use std::path::PathBuf;

use serde::Serialize;

/// One node of a generated tree. Mirrors the text rendering entry for entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count (directories, files) below this node, not counting itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children().iter().fold((0, 0), |(d, f), child| {
            let (cd, cf) = child.counts();
            if child.is_dir() {
                (d + cd + 1, f + cf)
            } else {
                (d + cd, f + cf + 1)
            }
        })
    }
}
