//! CLI entry point for explorer-tree

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use dialoguer::Select;
use explorer_tree::output::{print_error, print_result};
use explorer_tree::{
    ExcludePatterns, GenerateRequest, Host, Mode, Outcome, OutputConfig, OutputFormat, generate,
    host::error_message, load_settings,
};

const PROGRAM: &str = "explorer-tree";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Tree mode, skipping the interactive prompt
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// All files and folders
    All,
    /// Folders only
    Folders,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::All => Mode::AllFilesAndFolders,
            ModeArg::Folders => Mode::FoldersOnly,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "explorer-tree")]
#[command(about = "Render a folder as a tree, honoring files.exclude patterns")]
#[command(version)]
struct Args {
    /// Folder to render (defaults to the workspace root)
    path: Option<PathBuf>,

    /// Workspace root used when no folder is given (defaults to the current directory)
    #[arg(long = "workspace", value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Tree mode; prompts when omitted on a terminal
    #[arg(long = "mode", value_name = "MODE", conflicts_with = "dirs_only")]
    mode: Option<ModeArg>,

    /// List directories only (same as --mode folders)
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// JSON settings file to read files.exclude patterns from
    #[arg(long = "settings", value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Exclude entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Disable a pattern from the settings file (can be used multiple times)
    #[arg(long = "no-exclude", value_name = "PATTERN")]
    no_exclude: Vec<String>,

    /// Output in Markdown format (tree inside a code fence)
    #[arg(long = "markdown", short = 'm', conflicts_with = "json")]
    markdown: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "markdown")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Text
        }
    }

    fn preset_mode(&self) -> Option<Mode> {
        if self.dirs_only {
            Some(Mode::FoldersOnly)
        } else {
            self.mode.map(Mode::from)
        }
    }
}

/// Terminal host: prompts with a selection list and prints to stdout/stderr.
struct CliHost {
    preset_mode: Option<Mode>,
    output: OutputConfig,
    failed_output: bool,
}

impl Host for CliHost {
    fn choose_mode(&mut self) -> Option<Mode> {
        if let Some(mode) = self.preset_mode {
            return Some(mode);
        }
        if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
            log::debug!("no terminal for prompt, using '{}'", Mode::AllFilesAndFolders);
            return Some(Mode::AllFilesAndFolders);
        }

        let labels: Vec<&str> = Mode::CHOICES.iter().map(|m| m.label()).collect();
        match Select::new()
            .with_prompt("Select tree generation mode")
            .items(&labels)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice.map(|i| Mode::CHOICES[i]),
            Err(e) => {
                log::warn!("mode prompt failed: {}", e);
                None
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Err(e) = print_error(self.output.use_color, PROGRAM, message) {
            log::warn!("cannot write error message: {}", e);
        }
    }

    fn show_result(&mut self, text: &str) {
        if let Err(e) = print_result(&self.output, text) {
            // A closed pipe is not worth a second message
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                let _ = print_error(false, PROGRAM, &format!("error writing output: {}", e));
            }
            self.failed_output = true;
        }
    }
}

fn absolute(path: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if !path.is_absolute() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .try_init()
        .ok();

    let cwd = std::env::current_dir().ok();
    let mut host = CliHost {
        preset_mode: args.preset_mode(),
        output: OutputConfig {
            use_color: should_use_color(args.color),
            format: args.format(),
        },
        failed_output: false,
    };

    let base = match &args.settings {
        Some(path) => match load_settings(&absolute(path, cwd.as_deref())) {
            Ok(patterns) => patterns,
            Err(e) => {
                host.show_error(&error_message(&e));
                process::exit(1);
            }
        },
        None => ExcludePatterns::new(),
    };

    let request = GenerateRequest {
        target: args.path.as_deref().map(|p| absolute(p, cwd.as_deref())),
        workspace_root: args
            .workspace
            .as_deref()
            .map(|p| absolute(p, cwd.as_deref()))
            .or(cwd.clone()),
        exclude: base.with_overrides(&args.exclude, &args.no_exclude),
        format: args.format(),
    };

    match generate(&mut host, &request) {
        Outcome::Shown if !host.failed_output => {}
        Outcome::Shown | Outcome::Failed => process::exit(1),
        Outcome::Cancelled => {}
    }
}
