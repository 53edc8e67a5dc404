//! Command-line token parsing
//!
//! Recognizes `--filter=<pattern>` and, when counting is supported, `--count`.
//! Any other token aborts parsing with [`CliError::UnrecognizedArgument`].

use tracing::debug;

use crate::cli::error::{CliError, CliResult};

const FILTER_PREFIX: &str = "--filter=";
const COUNT_FLAG: &str = "--count";

/// Number of leading tokens (program invocation, script path) that are skipped.
pub const SKIPPED_TOKENS: usize = 2;

/// Which flags the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub support_count: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            support_count: true,
        }
    }
}

/// Parsed command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Case-sensitive substring matched against animal names
    pub pattern: String,
    /// `None` when counting is not supported at all
    pub count: Option<bool>,
}

impl Options {
    /// Whether names should carry survivor counts.
    pub fn annotate(&self) -> bool {
        self.count.unwrap_or(false)
    }
}

/// Parse `tokens`, skipping the first two (invocation and script path).
///
/// The pattern is everything after the first `=`, so `--filter=a=b` yields
/// `a=b` rather than stopping at the second `=`. Later `--filter=` tokens
/// override earlier ones. The first unrecognized token fails the whole parse.
pub fn parse_args<S: AsRef<str>>(tokens: &[S], options: ParserOptions) -> CliResult<Options> {
    let mut pattern = String::new();
    let mut count = false;

    for token in tokens.iter().skip(SKIPPED_TOKENS).map(|t| t.as_ref()) {
        if let Some(value) = token.strip_prefix(FILTER_PREFIX) {
            pattern = value.to_string();
        } else if options.support_count && token == COUNT_FLAG {
            count = true;
        } else {
            debug!(token, "unrecognized argument");
            return Err(CliError::UnrecognizedArgument(token.to_string()));
        }
    }

    Ok(Options {
        pattern,
        count: options.support_count.then_some(count),
    })
}

/// Parse process arguments.
///
/// `std::env::args` carries a single leading token, so the program name is
/// repeated to line up with the two skipped tokens of [`parse_args`].
pub fn parse_env_args<I>(args: I, options: ParserOptions) -> CliResult<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let tokens: Vec<String> = [program.clone(), program].into_iter().chain(args).collect();
    parse_args(&tokens, options)
}

/// One-line usage text matching the accepted flags.
pub fn usage(options: ParserOptions) -> String {
    let program = env!("CARGO_PKG_NAME");
    if options.support_count {
        format!("Usage: {} [--filter=<pattern>] [--count]", program)
    } else {
        format!("Usage: {} [--filter=<pattern>]", program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITHOUT_COUNT: ParserOptions = ParserOptions {
        support_count: false,
    };

    #[test]
    fn given_filter_with_equals_in_value_when_parsing_then_keeps_rest() {
        let opts =
            parse_args(&["node", "app.js", "--filter=a=b"], ParserOptions::default()).unwrap();
        assert_eq!(opts.pattern, "a=b");
    }

    #[test]
    fn given_repeated_filter_when_parsing_then_last_wins() {
        let opts = parse_args(
            &["node", "app.js", "--filter=foo", "--filter=bar"],
            ParserOptions::default(),
        )
        .unwrap();
        assert_eq!(opts.pattern, "bar");
    }

    #[test]
    fn given_bare_filter_when_parsing_then_unrecognized() {
        let err =
            parse_args(&["node", "app.js", "--filter"], ParserOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::UnrecognizedArgument(ref t) if t == "--filter"));
    }

    #[test]
    fn given_count_without_support_when_parsing_then_unrecognized() {
        let err = parse_args(&["node", "app.js", "--count"], WITHOUT_COUNT).unwrap_err();
        assert!(matches!(err, CliError::UnrecognizedArgument(ref t) if t == "--count"));
    }

    #[test]
    fn given_no_count_support_when_parsing_then_count_omitted() {
        let opts = parse_args(&["node", "app.js", "--filter=x"], WITHOUT_COUNT).unwrap();
        assert_eq!(opts.count, None);
        assert!(!opts.annotate());
    }

    #[test]
    fn given_fewer_than_two_tokens_when_parsing_then_defaults() {
        let opts = parse_args(&["node"], ParserOptions::default()).unwrap();
        assert_eq!(opts.pattern, "");
        assert_eq!(opts.count, Some(false));
    }

    #[test]
    fn given_process_args_when_parsing_then_first_flag_not_skipped() {
        let args = vec!["menagerie".to_string(), "--filter=ry".to_string()];
        let opts = parse_env_args(args, ParserOptions::default()).unwrap();
        assert_eq!(opts.pattern, "ry");
    }

    #[test]
    fn given_options_when_rendering_usage_then_count_listed_only_if_supported() {
        assert!(usage(ParserOptions::default()).ends_with("[--count]"));
        assert!(!usage(WITHOUT_COUNT).contains("--count"));
    }
}
