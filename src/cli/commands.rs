//! Command execution: parse, filter, render

use tracing::{info, instrument};

use crate::cli::args::{parse_env_args, Options};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::dataset;
use crate::domain::{filter_count_data, Country};

/// Filter `data` according to `options` and render it as pretty JSON
/// (two-space indent).
#[instrument(skip(data), fields(countries = data.len()))]
pub fn execute(options: &Options, data: &[Country]) -> CliResult<String> {
    let result = filter_count_data(&options.pattern, options.annotate(), data);
    info!(surviving = result.len(), "filter applied");
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Run against the built-in sample dataset with process-style `args`
/// (first item is the program name).
pub fn run<I>(args: I, settings: &Settings) -> CliResult<String>
where
    I: IntoIterator<Item = String>,
{
    let options = parse_env_args(args, settings.parser_options())?;
    let data = dataset::sample()?;
    execute(&options, &data)
}
