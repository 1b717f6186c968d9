use super::{present, HELM};

/// `helm show values <chart> [--repo <url>] [--version <constraint>]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowValuesCommand {
    pub chart: String,
    pub repo: Option<String>,
    pub version: Option<String>,
}

impl ShowValuesCommand {
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            ..Default::default()
        }
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn helm_arguments(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            HELM.to_string(),
            "show".to_string(),
            "values".to_string(),
            self.chart.clone(),
        ];

        if let Some(repo) = present(&self.repo) {
            args.push("--repo".to_string());
            args.push(repo.to_string());
        }

        if let Some(version) = present(&self.version) {
            args.push("--version".to_string());
            args.push(version.to_string());
        }

        args
    }
}
