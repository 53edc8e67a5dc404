use std::{env, process};

use menagerie::cli::args::usage;
use menagerie::cli::commands::run;
use menagerie::cli::{output, CliError};
use menagerie::config::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => fail(CliError::from(e), &Settings::default()),
    };

    setup_logging(settings.verbosity);

    match run(env::args(), &settings) {
        Ok(doc) => {
            if let Err(e) = output::json(&doc) {
                fail(CliError::from(e), &settings);
            }
        }
        Err(e) => fail(e, &settings),
    }
}

fn fail(e: CliError, settings: &Settings) -> ! {
    output::error(&e);
    if e.shows_usage() {
        output::usage(&usage(settings.parser_options()));
    }
    process::exit(e.exit_code());
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn setup_logging(verbosity: u8) {
    let filter = level_filter(verbosity);

    // stdout carries the JSON document, logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
