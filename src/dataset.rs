//! Embedded sample dataset

use thiserror::Error;
use tracing::debug;

use crate::domain::Country;

/// Sample countries compiled into the binary.
const SAMPLE_JSON: &str = include_str!("../data/countries.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of countries.
pub fn from_json(json: &str) -> Result<Vec<Country>, DatasetError> {
    let countries: Vec<Country> = serde_json::from_str(json)?;
    debug!(countries = countries.len(), "dataset loaded");
    Ok(countries)
}

/// Load the built-in sample dataset.
pub fn sample() -> Result<Vec<Country>, DatasetError> {
    from_json(SAMPLE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_embedded_json_when_loading_sample_then_parses() {
        let data = sample().unwrap();
        assert_eq!(data.len(), 5);
        assert!(data.iter().all(|c| !c.people.is_empty()));
    }

    #[test]
    fn given_missing_field_when_parsing_then_error() {
        let result = from_json(r#"[{"name": "c1"}]"#);
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }
}
