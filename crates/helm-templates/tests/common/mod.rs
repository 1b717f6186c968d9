//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use helm_templates::{HelmRunner, HelmRunnerBuilder, ValuesOverlay};
use tempfile::TempDir;

/// Stand-in for the helm binary
///
/// - appends its arguments (space-joined) to `$FAKE_HELM_LOG`
/// - fails with exit 9 if a `--values` file or the `--show-only` template
///   does not exist while it runs
/// - `$FAKE_HELM_EXIT` / `$FAKE_HELM_STDERR` force a failure
/// - `$FAKE_HELM_STDOUT` is printed verbatim when set
/// - otherwise prints the `--show-only` template, or each values file as
///   its own YAML document
const FAKE_HELM: &str = r#"#!/bin/sh
if [ -n "$FAKE_HELM_LOG" ]; then
  printf '%s\n' "$*" >> "$FAKE_HELM_LOG"
fi

chart=""
if [ "$1" = "template" ]; then
  chart="$3"
fi

show_only=""
values=""
prev=""
for arg in "$@"; do
  case "$prev" in
    --show-only)
      if [ ! -f "$chart/$arg" ]; then
        echo "Error: could not find template $arg in chart" >&2
        exit 9
      fi
      show_only="$arg"
      ;;
    --values)
      if [ ! -f "$arg" ]; then
        echo "Error: open $arg: no such file or directory" >&2
        exit 9
      fi
      values="$values $arg"
      ;;
  esac
  prev="$arg"
done

if [ -n "$FAKE_HELM_EXIT" ]; then
  printf '%s' "$FAKE_HELM_STDERR" >&2
  exit "$FAKE_HELM_EXIT"
fi

if [ -n "$FAKE_HELM_STDOUT" ]; then
  printf '%s' "$FAKE_HELM_STDOUT"
  exit 0
fi

if [ -n "$show_only" ]; then
  cat "$chart/$show_only"
  exit $?
fi

for file in $values; do
  printf -- '---\n'
  cat "$file"
done
"#;

/// Path of the fake helm script, written once per test binary
pub fn fake_helm_binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        use std::os::unix::fs::PermissionsExt;

        let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("fake-helm");
        fs::write(&path, FAKE_HELM).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    })
}

/// A fake helm plus a private log of its invocations
pub struct FakeHelm {
    dir: TempDir,
}

impl FakeHelm {
    pub fn new() -> Self {
        fake_helm_binary();
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("invocations.log")
    }

    /// Builder wired to the fake binary and this instance's log
    pub fn builder(&self) -> HelmRunnerBuilder {
        HelmRunner::builder()
            .helm_binary(fake_helm_binary())
            .env("FAKE_HELM_LOG", self.log_path().to_string_lossy())
    }

    pub fn runner(&self) -> HelmRunner {
        self.builder().build()
    }

    /// One entry per invocation: the arguments after the program name
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Argument following `flag` in each invocation
    pub fn flag_values(&self, flag: &str) -> Vec<String> {
        self.invocations()
            .iter()
            .flat_map(|line| {
                let words: Vec<&str> = line.split(' ').collect();
                words
                    .windows(2)
                    .filter(|pair| pair[0] == flag)
                    .map(|pair| pair[1].to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Create a minimal chart in a temp directory
pub fn create_test_chart(templates: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let chart = dir.path();

    fs::write(
        chart.join("Chart.yaml"),
        "apiVersion: v2\nname: test-chart\nversion: 0.1.0\n",
    )
    .unwrap();
    fs::write(chart.join("values.yaml"), "replicaCount: 1\n").unwrap();
    fs::create_dir(chart.join("templates")).unwrap();

    for (name, content) in templates {
        fs::write(chart.join("templates").join(name), content).unwrap();
    }

    dir
}

/// File names currently in a chart's templates directory
pub fn template_files(chart: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(chart.join("templates"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Workspace fixtures directory
pub fn fixtures_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures"))
}

/// Inline overlay from a JSON literal
pub fn overlay(value: serde_json::Value) -> ValuesOverlay {
    ValuesOverlay::try_from(value).unwrap()
}
