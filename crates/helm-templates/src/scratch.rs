//! Temporary files that live for exactly one helm invocation

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tempfile::{Builder, NamedTempFile};

use crate::error::Result;

const TEMPLATE_PREFIX: &str = "helm-templates-";
const VALUES_PREFIX: &str = "helm-values-";
const YAML_SUFFIX: &str = ".yaml";

/// A uniquely named file removed when dropped
pub(crate) struct ScratchFile {
    path: PathBuf,
    file: Option<NamedTempFile>,
}

impl ScratchFile {
    /// Write an inline values overlay to the system temp directory
    pub(crate) fn values(value: &Value) -> Result<Self> {
        let yaml = serde_yaml::to_string(value)?;
        let file = Builder::new()
            .prefix(VALUES_PREFIX)
            .suffix(YAML_SUFFIX)
            .tempfile()?;
        Self::create(file, &yaml)
    }

    /// Write a template into `dir` (a chart's `templates/` directory)
    pub(crate) fn template(dir: &Path, content: &str) -> Result<Self> {
        let file = Builder::new()
            .prefix(TEMPLATE_PREFIX)
            .suffix(YAML_SUFFIX)
            .tempfile_in(dir)?;
        Self::create(file, content)
    }

    fn create(mut file: NamedTempFile, content: &str) -> Result<Self> {
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let path = file.path().to_path_buf();
        tracing::debug!(path = %path.display(), "created scratch file");

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            match file.close() {
                Ok(()) => tracing::debug!(path = %self.path.display(), "removed scratch file"),
                Err(e) => tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove scratch file"
                ),
            }
        }
    }
}
