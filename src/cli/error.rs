//! CLI-level errors (wraps dataset, config and output errors)

use thiserror::Error;

use crate::dataset::DatasetError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnrecognizedArgument(String),

    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("invalid settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnrecognizedArgument(_) => crate::exitcode::FAILURE,
            CliError::Dataset(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Output(_) => crate::exitcode::SOFTWARE,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }

    /// Whether the usage line should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::UnrecognizedArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unrecognized_argument_then_exit_code_one_and_usage() {
        let err = CliError::UnrecognizedArgument("--foo".into());
        assert_eq!(err.to_string(), "unknown argument '--foo'");
        assert_eq!(err.exit_code(), 1);
        assert!(err.shows_usage());
    }

    #[test]
    fn given_dataset_error_then_dataerr_without_usage() {
        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = CliError::from(DatasetError::from(parse));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert!(!err.shows_usage());
    }
}
