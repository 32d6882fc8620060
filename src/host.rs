//! The generate command and the host interface it talks through
//!
//! A host supplies the interactive parts (mode prompt, error display, result
//! display). Keeping them behind `Host` lets the command run unchanged in a
//! terminal, an editor integration, or a test.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};
use crate::output::{OutputFormat, render};
use crate::settings::ExcludePatterns;
use crate::tree::TreeConfig;

/// Which entries to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    AllFilesAndFolders,
    FoldersOnly,
}

impl Mode {
    /// The choices offered to the user, in prompt order.
    pub const CHOICES: [Mode; 2] = [Mode::AllFilesAndFolders, Mode::FoldersOnly];

    pub fn label(self) -> &'static str {
        match self {
            Mode::AllFilesAndFolders => "All files and folders",
            Mode::FoldersOnly => "Folders only",
        }
    }

    pub fn include_files(self) -> bool {
        matches!(self, Mode::AllFilesAndFolders)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interactive collaborator for the generate command.
pub trait Host {
    /// Ask the user for a mode. `None` means the prompt was dismissed.
    fn choose_mode(&mut self) -> Option<Mode>;

    fn show_error(&mut self, message: &str);

    fn show_result(&mut self, text: &str);
}

/// Inputs for one invocation of the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Folder the command was invoked on, if any.
    pub target: Option<PathBuf>,
    /// Primary workspace root, used when no target is given.
    pub workspace_root: Option<PathBuf>,
    pub exclude: ExcludePatterns,
    pub format: OutputFormat,
}

/// How a generate invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The artifact was handed to the host.
    Shown,
    /// The user dismissed the mode prompt.
    Cancelled,
    /// An error message was shown.
    Failed,
}

/// Pick the folder to render: the explicit target, else the workspace root.
pub fn resolve_target(request: &GenerateRequest) -> Result<PathBuf> {
    request
        .target
        .clone()
        .or_else(|| request.workspace_root.clone())
        .ok_or(TreeError::MissingTarget)
}

/// Message shown for a failure after the target was resolved.
pub fn error_message(err: &TreeError) -> String {
    format!("Error generating tree: {}", err)
}

/// Run the generate command against `host`.
///
/// Nothing is shown on cancel; on failure exactly one error message is shown
/// and no partial tree.
pub fn generate<H: Host + ?Sized>(host: &mut H, request: &GenerateRequest) -> Outcome {
    let target = match resolve_target(request) {
        Ok(t) => t,
        Err(e) => {
            host.show_error(&e.to_string());
            return Outcome::Failed;
        }
    };

    let Some(mode) = host.choose_mode() else {
        log::debug!("mode selection dismissed");
        return Outcome::Cancelled;
    };

    match render_target(&target, mode, request) {
        Ok(text) => {
            host.show_result(&text);
            Outcome::Shown
        }
        Err(e) => {
            log::debug!("generation failed: {:?}", e);
            host.show_error(&error_message(&e));
            Outcome::Failed
        }
    }
}

fn render_target(target: &Path, mode: Mode, request: &GenerateRequest) -> Result<String> {
    if !target.is_dir() {
        return Err(TreeError::NotADirectory(target.to_path_buf()));
    }
    log::info!("generating '{}' tree for {}", mode, target.display());
    let config = TreeConfig::new(mode.include_files(), request.exclude.clone());
    render(target, &config, request.format)
}
