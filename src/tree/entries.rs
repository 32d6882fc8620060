//! Directory listing: read, filter, classify and order one directory's children

use std::cmp::Reverse;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use super::filter::ExcludeFilter;
use super::utils::relative_path;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name for display, lossily converted to UTF-8.
    pub name: String,
    /// Base name as stored on disk; join this, not `name`, to reach the entry.
    pub file_name: OsString,
    /// Resolved through symlinks.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            is_dir,
        }
    }

    /// Build an entry from an on-disk name, which may not be valid UTF-8.
    pub fn from_file_name(file_name: OsString, is_dir: bool) -> Self {
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_dir,
        }
    }
}

/// List the non-excluded children of `dir`, directories first.
///
/// Exclusion is checked against each child's path relative to `root` (the
/// traversal root, not `dir`) and against its bare name. A directory that
/// cannot be read yields an empty listing; an entry whose type cannot be
/// resolved, such as a dangling symlink, is dropped on its own.
pub fn list_entries(dir: &Path, root: &Path, filter: &ExcludeFilter) -> Vec<DirEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) => {
            log::debug!("cannot read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("error while reading {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let path = entry.path();
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let relative = relative_path(root, &path);

        if filter.is_excluded(&relative, &name) {
            log::trace!("excluded {}", relative);
            continue;
        }

        // fs::metadata follows symlinks to the final target
        match fs::metadata(&path) {
            Ok(meta) => entries.push(DirEntry::from_file_name(file_name, meta.is_dir())),
            Err(e) => log::debug!("cannot stat {}: {}", path.display(), e),
        }
    }

    sort_entries(&mut entries);
    entries
}

/// Order entries: directories before files, then by case-insensitive name.
///
/// Names that differ only in case put lowercase first, so the order is total
/// and identical across runs.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by_cached_key(|e| (!e.is_dir, e.name.to_lowercase(), Reverse(e.name.clone())));
}
