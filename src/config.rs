//! Runtime settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `MENAGERIE_*` prefix
//!
//! No configuration file is read; the tool does no file I/O.

use config::{Config, ConfigError, Environment};
use tracing::debug;

use crate::cli::args::ParserOptions;

/// Prefix for environment overrides, e.g. `MENAGERIE_SUPPORT_COUNT=false`.
pub const ENV_PREFIX: &str = "MENAGERIE";

/// Unified configuration for menagerie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Accept `--count` and annotate names with survivor counts (default: true)
    pub support_count: bool,
    /// Log verbosity on stderr: 0 = warn, 1 = info, 2 = debug, 3 = trace
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            support_count: true,
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then `MENAGERIE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(environment())
    }

    /// Load settings from an explicit environment source.
    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder().add_source(env).build()?;
        let mut settings = Self::default();

        // Env vars replace defaults; absent keys keep them
        if let Some(val) = lookup(config.get_bool("support_count"))? {
            settings.support_count = val;
        }
        if let Some(val) = lookup(config.get_int("verbosity"))? {
            settings.verbosity = u8::try_from(val.max(0)).unwrap_or(u8::MAX);
        }

        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Parser configuration derived from these settings.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            support_count: self.support_count,
        }
    }
}

/// `MENAGERIE_*` environment source.
///
/// Keys are flat, so no nesting separator is set; the prefix separator is
/// pinned to a single `_` so `MENAGERIE_SUPPORT_COUNT` maps to `support_count`.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("_")
}

/// Treat a missing key as "not set", keep every other error.
fn lookup<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
