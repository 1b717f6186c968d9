//! Values overlays passed to `helm template --values`

use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// A values source layered over a chart's defaults
///
/// Later overlays win key by key; the merge itself is performed by helm.
/// A `null` leaf in an inline overlay deletes the key from the defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuesOverlay {
    /// Path or URL handed to helm unchanged
    File(String),
    /// In-memory document, written to a temporary file before invocation
    Inline(Value),
}

impl ValuesOverlay {
    pub fn is_inline(&self) -> bool {
        matches!(self, ValuesOverlay::Inline(_))
    }
}

impl From<&str> for ValuesOverlay {
    fn from(path: &str) -> Self {
        ValuesOverlay::File(path.to_string())
    }
}

impl From<String> for ValuesOverlay {
    fn from(path: String) -> Self {
        ValuesOverlay::File(path)
    }
}

impl From<&Path> for ValuesOverlay {
    fn from(path: &Path) -> Self {
        ValuesOverlay::File(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for ValuesOverlay {
    fn from(path: PathBuf) -> Self {
        ValuesOverlay::from(path.as_path())
    }
}

impl From<Value> for ValuesOverlay {
    fn from(value: Value) -> Self {
        ValuesOverlay::Inline(value)
    }
}

impl From<Mapping> for ValuesOverlay {
    fn from(mapping: Mapping) -> Self {
        ValuesOverlay::Inline(Value::Mapping(mapping))
    }
}

/// JSON documents convert through serde so `null` leaves survive as YAML nulls
impl TryFrom<JsonValue> for ValuesOverlay {
    type Error = serde_yaml::Error;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        serde_yaml::to_value(value).map(ValuesOverlay::Inline)
    }
}
