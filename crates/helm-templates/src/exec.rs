//! Subprocess execution for helm commands

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use helm_templates_core::ParseError;

use crate::error::{HelmError, Result};

/// Runs argument vectors produced by the command builders
///
/// Index 0 of the vector names the program; the invoker spawns its own
/// configured binary in that position. Environment overrides are layered
/// over the inherited environment. No retries: a non-zero exit is
/// returned to the caller as `HelmError::Execution` straight away.
#[derive(Debug, Clone)]
pub struct Invoker {
    program: PathBuf,
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
}

impl Invoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: None,
            env: BTreeMap::new(),
        }
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Execute the command and return its stdout
    pub fn run(&self, args: &[String]) -> Result<String> {
        let program = self.program.to_string_lossy().into_owned();
        let rest = args.get(1..).unwrap_or_default();

        let mut command = Command::new(&self.program);
        command.args(rest).envs(&self.env);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        tracing::debug!(args = ?args, cwd = ?self.cwd, "running helm");

        let output = command.output().map_err(|source| HelmError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            let attempted: Vec<String> = std::iter::once(program)
                .chain(rest.iter().cloned())
                .collect();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            tracing::debug!(
                code = ?output.status.code(),
                stderr = %stderr.trim_end(),
                "helm exited unsuccessfully"
            );

            return Err(HelmError::Execution {
                code: output.status.code(),
                args: attempted,
                stderr,
            });
        }

        // stderr is only reported, but stdout is parsed and must decode exactly
        Ok(String::from_utf8(output.stdout).map_err(ParseError::from)?)
    }
}
