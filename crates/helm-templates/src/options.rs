//! Options for rendering operations

use helm_templates_core::{TemplateFlags, ValuesOverlay};

/// `helm template` flags plus the values overlays to apply, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateOptions {
    pub flags: TemplateFlags,
    pub values: Vec<ValuesOverlay>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_versions<I, S>(mut self, api_versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.api_versions = api_versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn dry_run(mut self, dry_run: impl Into<String>) -> Self {
        self.flags.dry_run = Some(dry_run.into());
        self
    }

    pub fn include_crds(mut self, include_crds: bool) -> Self {
        self.flags.include_crds = Some(include_crds);
        self
    }

    pub fn is_upgrade(mut self, is_upgrade: bool) -> Self {
        self.flags.is_upgrade = Some(is_upgrade);
        self
    }

    pub fn kube_version(mut self, kube_version: impl Into<String>) -> Self {
        self.flags.kube_version = Some(kube_version.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.flags.namespace = Some(namespace.into());
        self
    }

    pub fn no_hooks(mut self, no_hooks: bool) -> Self {
        self.flags.no_hooks = Some(no_hooks);
        self
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.flags.repo = Some(repo.into());
        self
    }

    pub fn show_only<I, S>(mut self, show_only: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.show_only = show_only.into_iter().map(Into::into).collect();
        self
    }

    pub fn skip_tests(mut self, skip_tests: bool) -> Self {
        self.flags.skip_tests = Some(skip_tests);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.flags.version = Some(version.into());
        self
    }

    /// Append one overlay; later overlays take precedence
    pub fn value(mut self, overlay: impl Into<ValuesOverlay>) -> Self {
        self.values.push(overlay.into());
        self
    }

    /// Replace the overlay list
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValuesOverlay>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_setters_fill_flags() {
        let options = TemplateOptions::new()
            .namespace("ns")
            .include_crds(false)
            .show_only(["templates/a.yaml"])
            .value("base.yaml")
            .value(ValuesOverlay::try_from(json!({ "replicaCount": 2 })).unwrap());

        assert_eq!(options.flags.namespace.as_deref(), Some("ns"));
        assert_eq!(options.flags.include_crds, Some(false));
        assert_eq!(options.flags.show_only, vec!["templates/a.yaml"]);
        assert_eq!(options.values.len(), 2);
        assert!(!options.values[0].is_inline());
        assert!(options.values[1].is_inline());
    }
}
