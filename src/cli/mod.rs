//! CLI layer: argument parsing, command execution and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{parse_args, Options, ParserOptions};
pub use error::{CliError, CliResult};
