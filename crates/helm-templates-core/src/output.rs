//! Decoding of YAML written by helm to stdout

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{ParseError, Result};

/// One rendered document from `helm template`
pub type Manifest = Mapping;

/// Parse multi-document YAML into manifests, preserving document order
///
/// Empty documents (a template that rendered to nothing but comments) are
/// skipped. Any other non-mapping document is rejected.
pub fn parse_manifests(yaml: &str) -> Result<Vec<Manifest>> {
    let mut manifests = Vec::new();

    for document in serde_yaml::Deserializer::from_str(yaml) {
        match Value::deserialize(document)? {
            Value::Null => continue,
            Value::Mapping(mapping) => manifests.push(mapping),
            other => {
                return Err(ParseError::UnexpectedShape {
                    expected: "a mapping per document",
                    found: describe(&other).to_string(),
                });
            }
        }
    }

    Ok(manifests)
}

/// Parse a single YAML document that must be a mapping
///
/// An empty document is an empty mapping; `helm show values` prints nothing
/// for a chart without defaults.
pub fn parse_mapping(yaml: &str) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ParseError::UnexpectedShape {
            expected: "a mapping",
            found: describe(&other).to_string(),
        }),
    }
}

/// Short name of a YAML node kind, for error messages
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
