//! Cleaning configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clean::parsers::DEFAULT_REFERENCE_YEAR;

/// Knobs for the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleaningConfig {
    /// Year `Company Age` is measured against.
    #[serde(default = "default_reference_year")]
    pub reference_year: i64,
    /// Run the metro-area location step and retire `Location`.
    #[serde(default)]
    pub include_location: bool,
    /// Columns dropped in addition to the raw columns the pipeline consumes.
    #[serde(default)]
    pub extra_retired: Vec<String>,
}

fn default_reference_year() -> i64 {
    DEFAULT_REFERENCE_YEAR
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            include_location: false,
            extra_retired: Vec::new(),
        }
    }
}

impl CleaningConfig {
    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid cleaning config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(CleaningConfig::from_json_str("{}").unwrap(), CleaningConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = CleaningConfig::from_json_str(
            r#"{"reference_year": 2030, "include_location": true, "extra_retired": ["Rating"]}"#,
        )
        .unwrap();
        assert_eq!(config.reference_year, 2030);
        assert!(config.include_location);
        assert_eq!(config.extra_retired, vec!["Rating".to_string()]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CleaningConfig::from_json_str(r#"{"referenceYear": 2030}"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.json");
        std::fs::write(&path, r#"{"reference_year": 2024}"#).unwrap();
        assert_eq!(CleaningConfig::from_path(&path).unwrap().reference_year, 2024);
    }
}
