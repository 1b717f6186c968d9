//! Helm Templates - drive the `helm` CLI from Rust test suites
//!
//! `HelmRunner` renders charts with `helm template`, reads chart defaults
//! with `helm show values`, and manages chart dependencies, returning
//! parsed manifests and values instead of raw text.
//!
//! helm has no native command for rendering `NOTES.txt` or for printing a
//! chart's fully merged values. `HelmRunner::notes` and
//! `HelmRunner::computed_values` work around that by injecting a scratch
//! template into the chart's `templates/` directory for the duration of a
//! single render, so they require a chart on the local filesystem.
//!
//! ## Example
//!
//! ```rust,no_run
//! use helm_templates::{HelmRunner, TemplateOptions, ValuesOverlay};
//! use serde_json::json;
//!
//! # fn example() -> helm_templates::Result<()> {
//! let runner = HelmRunner::builder().cwd("charts").build();
//!
//! let manifests = runner.template(
//!     "my-app",
//!     "release",
//!     &TemplateOptions::new()
//!         .namespace("staging")
//!         .value(ValuesOverlay::try_from(json!({ "serviceAccount": { "create": false } }))?),
//! )?;
//! assert!(manifests.iter().all(|m| m.get("kind").is_some()));
//!
//! let notes = runner.notes("my-app", "release", &TemplateOptions::new())?;
//! assert!(notes.contains("Get the application URL"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod exec;
pub mod options;
pub mod runner;

mod adhoc;
mod scratch;

pub use error::{HelmError, Result};
pub use exec::Invoker;
pub use options::TemplateOptions;
pub use runner::{HelmRunner, HelmRunnerBuilder};

pub use helm_templates_core::{
    parse_dependency_list, parse_manifests, parse_mapping, DependencyCommand, DependencyRecord,
    Manifest, ParseError, ShowValuesCommand, TemplateCommand, TemplateFlags, ValuesOverlay, HELM,
};
