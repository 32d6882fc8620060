//! Output configuration types

/// Shape of the generated artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawing tree text
    #[default]
    Text,
    /// Tree text inside a fenced code block
    Markdown,
    /// Pretty-printed `TreeNode` structure
    Json,
}

/// Configuration for writing the artifact to a terminal.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub format: OutputFormat,
}
