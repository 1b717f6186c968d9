use super::{present, HELM};

const DEFAULT_DRY_RUN: &str = "client";

/// Optional flags accepted by `helm template`
///
/// `None` means "use the default". Boolean defaults: `include_crds` is on,
/// everything else is off. Empty lists emit nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFlags {
    pub api_versions: Vec<String>,
    pub dry_run: Option<String>,
    pub include_crds: Option<bool>,
    pub is_upgrade: Option<bool>,
    pub kube_version: Option<String>,
    pub namespace: Option<String>,
    pub no_hooks: Option<bool>,
    pub repo: Option<String>,
    pub show_only: Vec<String>,
    pub skip_tests: Option<bool>,
    pub version: Option<String>,
}

impl TemplateFlags {
    pub fn dry_run(&self) -> &str {
        present(&self.dry_run).unwrap_or(DEFAULT_DRY_RUN)
    }

    pub fn include_crds(&self) -> bool {
        self.include_crds.unwrap_or(true)
    }

    pub fn is_upgrade(&self) -> bool {
        self.is_upgrade.unwrap_or(false)
    }

    pub fn no_hooks(&self) -> bool {
        self.no_hooks.unwrap_or(false)
    }

    pub fn skip_tests(&self) -> bool {
        self.skip_tests.unwrap_or(false)
    }
}

/// `helm template <name> <chart> [flags...]`
///
/// `values` holds paths or URLs only; in-memory overlays must already have
/// been written to disk by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCommand {
    pub chart: String,
    pub name: String,
    pub flags: TemplateFlags,
    pub values: Vec<String>,
}

impl TemplateCommand {
    pub fn new(chart: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn flags(mut self, flags: TemplateFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn helm_arguments(&self) -> Vec<String> {
        let flags = &self.flags;
        let mut args: Vec<String> = vec![
            HELM.to_string(),
            "template".to_string(),
            self.name.clone(),
            self.chart.clone(),
        ];

        if !flags.api_versions.is_empty() {
            args.push("--api-versions".to_string());
            args.push(flags.api_versions.join(","));
        }

        args.push(format!("--dry-run={}", flags.dry_run()));

        if flags.include_crds() {
            args.push("--include-crds".to_string());
        }

        if flags.is_upgrade() {
            args.push("--is-upgrade".to_string());
        }

        if let Some(kube_version) = present(&flags.kube_version) {
            args.push("--kube-version".to_string());
            args.push(kube_version.to_string());
        }

        if let Some(namespace) = present(&flags.namespace) {
            args.push("--namespace".to_string());
            args.push(namespace.to_string());
        }

        if flags.no_hooks() {
            args.push("--no-hooks".to_string());
        }

        if let Some(repo) = present(&flags.repo) {
            args.push("--repo".to_string());
            args.push(repo.to_string());
        }

        for template_path in &flags.show_only {
            args.push("--show-only".to_string());
            args.push(template_path.clone());
        }

        if flags.skip_tests() {
            args.push("--skip-tests".to_string());
        }

        for values_file_or_url in &self.values {
            args.push("--values".to_string());
            args.push(values_file_or_url.clone());
        }

        if let Some(version) = present(&flags.version) {
            args.push("--version".to_string());
            args.push(version.to_string());
        }

        args
    }
}
