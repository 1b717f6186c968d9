//! Rendering of ad-hoc templates injected into a local chart
//!
//! helm cannot render `NOTES.txt` outside of `helm install`, nor print the
//! values tree a chart actually renders with (its defaults merged with
//! dependency defaults and overlays). Both are recovered by writing a
//! scratch template into `<chart>/templates/`, rendering only that file
//! with `--show-only`, and reading the single resulting document.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use helm_templates_core::output::describe;
use helm_templates_core::{Manifest, ValuesOverlay};

use crate::error::{HelmError, Result};
use crate::options::TemplateOptions;
use crate::runner::HelmRunner;
use crate::scratch::ScratchFile;

const NOTES_KEY: &str = "NOTES.txt";
const NOTES_INDENT: &str = "  ";
const COMPUTED_VALUES_TEMPLATE: &str = "{{- toYaml .Values }}\n";
const COMPUTED_VALUES_RELEASE: &str = "release-name";

impl HelmRunner {
    /// Render `content` as if it were a template of the local `chart`
    ///
    /// `options.flags.show_only` is replaced with the injected file.
    pub fn adhoc_template(
        &self,
        chart: &str,
        content: &str,
        name: &str,
        options: &TemplateOptions,
    ) -> Result<Manifest> {
        let chart_path = self.local_chart(chart, "Adhoc templates")?;
        self.render_injected(chart, &chart_path, content, name, options)
    }

    /// The values tree templates of `chart` see after all merging
    pub fn computed_values(&self, chart: &str, values: &[ValuesOverlay]) -> Result<Mapping> {
        let chart_path = self.local_chart(chart, "Computed values")?;

        let options = TemplateOptions::new().values(values.iter().cloned());
        self.render_injected(
            chart,
            &chart_path,
            COMPUTED_VALUES_TEMPLATE,
            COMPUTED_VALUES_RELEASE,
            &options,
        )
    }

    /// Rendered `templates/NOTES.txt` of a local chart
    pub fn notes(&self, chart: &str, name: &str, options: &TemplateOptions) -> Result<String> {
        let chart_path = self.local_chart(chart, "Notes")?;

        let notes_path = chart_path.join("templates").join(NOTES_KEY);
        if !notes_path.exists() {
            return Err(HelmError::NotesNotFound {
                path: notes_path.display().to_string(),
            });
        }
        let notes_template = std::fs::read_to_string(&notes_path)?;

        // CRDs and test hooks have nothing to do with notes
        let options = options.clone().include_crds(false).skip_tests(true);
        let manifest = self.render_injected(
            chart,
            &chart_path,
            &notes_document(&notes_template),
            name,
            &options,
        )?;

        match manifest.get(NOTES_KEY) {
            Some(Value::String(notes)) => Ok(notes.clone()),
            Some(other) => Err(HelmError::invalid_result(format!(
                "expected notes to render as a string, got {}",
                describe(other)
            ))),
            None => Err(HelmError::invalid_result(format!(
                "rendered notes document has no `{}` key",
                NOTES_KEY
            ))),
        }
    }

    /// Inject `content` into an already resolved chart and render only it
    fn render_injected(
        &self,
        chart: &str,
        chart_path: &Path,
        content: &str,
        name: &str,
        options: &TemplateOptions,
    ) -> Result<Manifest> {
        let templates = chart_path.join("templates");
        if !templates.is_dir() {
            return Err(HelmError::TemplatesNotFound {
                chart: chart.to_string(),
                path: templates.display().to_string(),
            });
        }
        let template = ScratchFile::template(&templates, content)?;

        let mut options = options.clone();
        options.flags.show_only = vec![format!("templates/{}", template.file_name())];

        let manifests = self.template(chart, name, &options)?;
        manifests
            .into_iter()
            .next()
            .ok_or_else(|| HelmError::invalid_result("adhoc template rendered no document"))
    }
}

/// Embed a notes template as a literal block under `NOTES.txt`
fn notes_document(template: &str) -> String {
    let mut document = format!("---\n{}: |\n", NOTES_KEY);
    for line in template.split_inclusive('\n') {
        if !line.trim().is_empty() {
            document.push_str(NOTES_INDENT);
        }
        document.push_str(line);
    }
    document
}
