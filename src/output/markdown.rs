//! Markdown output formatting

/// Fence the tree text so markdown viewers keep the box-drawing alignment.
pub fn to_markdown(tree: &str) -> String {
    let mut output = String::with_capacity(tree.len() + 8);
    output.push_str("```\n");
    output.push_str(tree);
    if !tree.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("```\n");
    output
}
