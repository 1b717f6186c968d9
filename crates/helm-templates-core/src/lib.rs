//! Helm Templates Core - pure building blocks for driving the `helm` CLI
//!
//! This crate contains everything that does not touch a process or the
//! filesystem:
//! - `command`: argument vectors for `helm template`, `helm show values`
//!   and `helm dependency ...`
//! - `output`: decoding of YAML written by helm to stdout
//! - `dependency`: the tabular `helm dependency list` format
//! - `values`: values overlays (files or in-memory documents)

pub mod command;
pub mod dependency;
pub mod error;
pub mod output;
pub mod values;

pub use command::{DependencyCommand, ShowValuesCommand, TemplateCommand, TemplateFlags, HELM};
pub use dependency::{parse_dependency_list, DependencyRecord};
pub use error::{ParseError, Result};
pub use output::{parse_manifests, parse_mapping, Manifest};
pub use values::ValuesOverlay;
