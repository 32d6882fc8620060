//! Terminal output
//!
//! Writes the finished artifact and error messages through termcolor, so
//! colors are dropped automatically when they are disabled.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::{OutputConfig, OutputFormat};

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Write tree text, highlighting the root header line.
pub fn write_tree<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    let (header, body) = text.split_once('\n').unwrap_or((text, ""));
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(out, "{}", header)?;
    out.reset()?;
    writeln!(out)?;
    write!(out, "{}", body)?;
    Ok(())
}

/// Print a generated artifact to stdout.
pub fn print_result(config: &OutputConfig, text: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(config.use_color));
    match config.format {
        OutputFormat::Text => write_tree(&mut stdout, text)?,
        OutputFormat::Markdown | OutputFormat::Json => write!(stdout, "{}", text)?,
    }
    stdout.flush()
}

/// Print an error message to stderr, prefixed with the program name.
pub fn print_error(use_color: bool, program: &str, message: &str) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    write!(stderr, "{}: ", program)?;
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    write!(stderr, "{}", message)?;
    stderr.reset()?;
    writeln!(stderr)?;
    Ok(())
}
