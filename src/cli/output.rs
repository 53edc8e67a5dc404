//! Terminal output
//!
//! Data goes to stdout, diagnostics to stderr. Respects NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Error".red().bold(), msg);
}

/// Print usage line (no color) to stderr
pub fn usage(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg);
}

/// Print rendered JSON document to stdout.
///
/// A reader that went away (`menagerie | head`) is not an error.
pub fn json(doc: &str) -> io::Result<()> {
    write_json(&mut io::stdout().lock(), doc)
}

/// Write `doc` plus a newline, treating a broken pipe as success.
pub fn write_json<W: Write>(out: &mut W, doc: &str) -> io::Result<()> {
    match writeln!(out, "{}", doc).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
