//! Shared helpers for rendering tree lines

use std::path::{Component, Path};

/// Connector for an entry that has siblings after it.
pub const MIDDLE_CONNECTOR: &str = "├─ ";
/// Connector for the final entry of a sibling group.
pub const LAST_CONNECTOR: &str = "└─ ";
/// Prefix segment under a middle child: keeps the vertical guide going.
pub const MIDDLE_CONTINUATION: &str = "│  ";
/// Prefix segment under the last child.
pub const LAST_CONTINUATION: &str = "   ";

pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_CONNECTOR
    } else {
        MIDDLE_CONNECTOR
    }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, LAST_CONTINUATION)
    } else {
        format!("{}{}", current_prefix, MIDDLE_CONTINUATION)
    }
}

/// Display name for the traversal root.
///
/// Falls back to the canonical path's name, then to the full path, for roots
/// like `..` or `/` that have no final component.
pub fn root_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    if let Some(name) = path
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    {
        return name;
    }
    path.display().to_string()
}

/// Path of `path` relative to `root`, with components joined by `/` on every
/// platform so that patterns like `build/output` work everywhere.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
