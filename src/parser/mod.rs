//! Settings parser (verb module)
//!
//! Transforms YAML files into settings.

use std::path::Path;
use tracing::debug;
use crate::error::ParseError;
use crate::settings::Settings;

/// Parse settings from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Settings, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    debug!(path = %path_str, "loading settings");
    parse_str(&contents)
}

/// Parse settings from a YAML string
pub fn parse_str(yaml: &str) -> Result<Settings, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}
