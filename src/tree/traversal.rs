//! Common traversal logic shared by TreeBuilder and TreeWalker.

use std::fs;
use std::path::{Path, PathBuf};

use super::entries::{DirEntry, list_entries};
use super::filter::ExcludeFilter;

/// Directory listing function: (dir, root, filter) -> entries.
pub type Lister = fn(&Path, &Path, &ExcludeFilter) -> Vec<DirEntry>;

/// Read-only state for one depth-first traversal.
pub struct Traversal<'a> {
    pub root: &'a Path,
    pub include_files: bool,
    pub filter: &'a ExcludeFilter,
    lister: Lister,
}

impl<'a> Traversal<'a> {
    pub fn new(root: &'a Path, include_files: bool, filter: &'a ExcludeFilter) -> Self {
        Self {
            root,
            include_files,
            filter,
            lister: list_entries,
        }
    }

    /// Replace the filesystem lister, e.g. to simulate unreadable directories.
    #[cfg(test)]
    pub fn with_lister(mut self, lister: Lister) -> Self {
        self.lister = lister;
        self
    }

    /// List the entries of `dir` that will actually be rendered.
    pub fn visible_entries(&self, dir: &Path) -> Vec<DirEntry> {
        let mut entries = (self.lister)(dir, self.root, self.filter);
        if !self.include_files {
            entries.retain(|e| e.is_dir);
        }
        entries
    }
}

/// Canonical paths of the directories on the current descent path.
///
/// Used to stop at directories reached again through a symlink, which would
/// otherwise recurse forever.
#[derive(Debug, Default)]
pub struct Ancestors(Vec<PathBuf>);

impl Ancestors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `dir` onto the chain. Returns false, without pushing, when `dir`
    /// is already an ancestor of itself.
    pub fn enter(&mut self, dir: &Path) -> bool {
        let key = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if self.0.contains(&key) {
            log::debug!("not descending into {}: symlink cycle", dir.display());
            return false;
        }
        self.0.push(key);
        true
    }

    pub fn leave(&mut self) {
        self.0.pop();
    }
}
