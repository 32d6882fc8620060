//! JSON output formatting

use crate::error::Result;
use crate::tree::TreeNode;

/// Serialize a tree as pretty-printed JSON, with a trailing newline.
pub fn to_json(node: &TreeNode) -> Result<String> {
    let mut json = serde_json::to_string_pretty(node)?;
    json.push('\n');
    Ok(json)
}
