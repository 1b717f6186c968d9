//! Argument vector builders for helm subcommands
//!
//! Every builder returns the full command line, program name included.
//! Flag order is fixed per subcommand and never depends on the order in
//! which options were set.

mod dependency;
mod show_values;
mod template;

pub use dependency::DependencyCommand;
pub use show_values::ShowValuesCommand;
pub use template::{TemplateCommand, TemplateFlags};

/// Program name placed at index 0 of every argument vector
pub const HELM: &str = "helm";

/// Treat empty strings the same as unset values
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
