//! Error handling utilities for the CLI.

use std::io::{self, IsTerminal, Write};

use nu_ansi_term::Color;
use thiserror::Error;

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Vector(#[from] growvec::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let mut stderr = io::stderr();
    let color = !no_color && stderr.is_terminal();
    render_error_to(&error, &mut stderr, color).ok();
    std::process::exit(1);
}

/// Write `error: <message>` to `out`, with a red label when `color` is set.
pub fn render_error_to(error: &CliError, out: &mut impl Write, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}: {error}", Color::Red.bold().paint("error"))
    } else {
        writeln!(out, "error: {error}")
    }
}
