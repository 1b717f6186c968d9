//! Chart runner: composes command builders, the invoker and output parsers

use std::collections::BTreeMap;
use std::path::PathBuf;

use helm_templates_core::{
    parse_dependency_list, parse_manifests, parse_mapping, DependencyCommand, DependencyRecord,
    Manifest, ShowValuesCommand, TemplateCommand, ValuesOverlay, HELM,
};
use serde_yaml::Mapping;

use crate::error::{HelmError, Result};
use crate::exec::Invoker;
use crate::options::TemplateOptions;
use crate::scratch::ScratchFile;

/// Environment variable helm exports to plugins with its own path
pub const HELM_BIN_ENV: &str = "HELM_BIN";

/// Runs helm against charts with a fixed working directory and environment
#[derive(Debug, Clone)]
pub struct HelmRunner {
    invoker: Invoker,
}

impl Default for HelmRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl HelmRunner {
    /// Runner using the ambient working directory and environment
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> HelmRunnerBuilder {
        HelmRunnerBuilder::default()
    }

    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    /// Chart defaults from `helm show values`
    pub fn values(
        &self,
        chart: &str,
        repo: Option<&str>,
        version: Option<&str>,
    ) -> Result<Mapping> {
        let mut command = ShowValuesCommand::new(chart);
        command.repo = repo.map(str::to_string);
        command.version = version.map(str::to_string);

        let stdout = self.invoker.run(&command.helm_arguments())?;
        Ok(parse_mapping(&stdout)?)
    }

    /// Render a chart with `helm template`
    ///
    /// Inline overlays are written to temporary files for the duration of
    /// the call; the files are removed on every exit path.
    pub fn template(
        &self,
        chart: &str,
        name: &str,
        options: &TemplateOptions,
    ) -> Result<Vec<Manifest>> {
        let mut scratch = Vec::new();
        let mut values = Vec::with_capacity(options.values.len());

        for overlay in &options.values {
            match overlay {
                ValuesOverlay::File(path) => values.push(path.clone()),
                ValuesOverlay::Inline(value) => {
                    let file = ScratchFile::values(value)?;
                    values.push(file.path().to_string_lossy().into_owned());
                    scratch.push(file);
                }
            }
        }

        let command = TemplateCommand::new(chart, name)
            .flags(options.flags.clone())
            .values(values);
        let stdout = self.invoker.run(&command.helm_arguments())?;

        Ok(parse_manifests(&stdout)?)
    }

    pub fn dependency_build(&self, chart: &str) -> Result<()> {
        self.invoker
            .run(&DependencyCommand::Build.helm_arguments(chart))?;
        Ok(())
    }

    pub fn dependency_update(&self, chart: &str) -> Result<()> {
        self.invoker
            .run(&DependencyCommand::Update.helm_arguments(chart))?;
        Ok(())
    }

    /// Dependencies in `Chart.yaml` order with their resolution status
    pub fn dependency_list(&self, chart: &str) -> Result<Vec<DependencyRecord>> {
        let stdout = self
            .invoker
            .run(&DependencyCommand::List.helm_arguments(chart))?;
        Ok(parse_dependency_list(&stdout)?)
    }

    /// Run `helm dependency update` only when some dependency is not `ok`
    ///
    /// Returns whether an update was run.
    pub fn dependency_update_if_missing(&self, chart: &str) -> Result<bool> {
        let dependencies = self.dependency_list(chart)?;
        if dependencies.iter().all(DependencyRecord::is_ok) {
            return Ok(false);
        }

        tracing::debug!(
            chart,
            stale = dependencies.iter().filter(|d| !d.is_ok()).count(),
            "updating chart dependencies"
        );
        self.dependency_update(chart)?;
        Ok(true)
    }

    /// Resolve a chart that must be an unpacked directory on disk
    pub(crate) fn local_chart(&self, chart: &str, operation: &'static str) -> Result<PathBuf> {
        let path = match self.invoker.cwd() {
            Some(cwd) => cwd.join(chart),
            None => PathBuf::from(chart),
        };

        if !path.is_dir() {
            return Err(HelmError::ChartNotFound {
                operation,
                chart: chart.to_string(),
                path: path.display().to_string(),
            });
        }

        Ok(path)
    }
}

/// Builder for `HelmRunner`
#[derive(Debug, Clone, Default)]
pub struct HelmRunnerBuilder {
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
    helm_binary: Option<PathBuf>,
}

impl HelmRunnerBuilder {
    /// Working directory for helm and base for relative chart paths
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Environment variable set on every helm invocation
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// helm executable to run; defaults to `$HELM_BIN`, then `helm` on PATH
    pub fn helm_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.helm_binary = Some(path.into());
        self
    }

    pub fn build(self) -> HelmRunner {
        let program = self
            .helm_binary
            .or_else(|| std::env::var_os(HELM_BIN_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(HELM));

        HelmRunner {
            invoker: Invoker::new(program).with_cwd(self.cwd).with_env(self.env),
        }
    }
}
