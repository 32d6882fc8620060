//! Error types for tree generation

use std::io;
use std::path::PathBuf;

/// Errors that abort a whole generation run.
///
/// Per-directory read failures never show up here: the entry lister absorbs
/// them and renders the directory as empty.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("No folder selected or workspace available")]
    MissingTarget,
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read settings file '{}': {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file '{}': {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
