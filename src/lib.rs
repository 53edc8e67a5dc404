//! Filter a nested dataset of countries, people and animals by animal name.
//!
//! The core is [`domain::filter_count_data`]; [`cli`] turns command-line
//! tokens into its inputs and renders the result as JSON.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod exitcode;
pub mod util;
