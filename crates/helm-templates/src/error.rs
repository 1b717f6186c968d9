//! Error types for helm invocations

use helm_templates_core::ParseError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum HelmError {
    /// A local-only operation was pointed at a path that does not exist
    #[error(
        "{operation} can only be rendered for local charts. Could not find local chart `{chart}` ({path})"
    )]
    #[diagnostic(
        code(helm_templates::chart_not_found),
        help("pass an unpacked chart directory, relative to the runner's working directory or absolute")
    )]
    ChartNotFound {
        operation: &'static str,
        chart: String,
        path: String,
    },

    /// A local chart without a `templates/` directory to inject into
    #[error("Local chart `{chart}` has no templates directory at `{path}`")]
    #[diagnostic(
        code(helm_templates::templates_not_found),
        help("create a `templates/` directory in the chart")
    )]
    TemplatesNotFound { chart: String, path: String },

    #[error("Unable to find notes template at `{path}`")]
    #[diagnostic(code(helm_templates::notes_not_found))]
    NotesNotFound { path: String },

    /// helm ran and exited non-zero
    #[error(
        "helm command failed with {}: exec {}\n{stderr}",
        exit_description(.code),
        .args.join(" ")
    )]
    #[diagnostic(code(helm_templates::execution))]
    Execution {
        code: Option<i32>,
        args: Vec<String>,
        stderr: String,
    },

    /// helm could not be started at all
    #[error("Failed to run `{program}`: {source}")]
    #[diagnostic(
        code(helm_templates::spawn),
        help("install helm, put it on PATH, or point HELM_BIN at the binary")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// helm succeeded but printed something of the wrong shape
    #[error("Unexpected helm output: {message}")]
    #[diagnostic(code(helm_templates::invalid_result))]
    InvalidResult { message: String },

    #[error("Failed to parse helm output: {0}")]
    #[diagnostic(code(helm_templates::parse))]
    Parse(#[source] ParseError),

    #[error("Failed to serialize values overlay: {0}")]
    #[diagnostic(code(helm_templates::serialize))]
    Serialize(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(helm_templates::io))]
    Io(#[from] std::io::Error),
}

impl HelmError {
    pub fn invalid_result(message: impl Into<String>) -> Self {
        Self::InvalidResult {
            message: message.into(),
        }
    }

    /// Exit code of a failed helm process, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HelmError::Execution { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<ParseError> for HelmError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedShape { .. } => HelmError::InvalidResult {
                message: err.to_string(),
            },
            other => HelmError::Parse(other),
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("return code {}", code),
        None => "no return code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, HelmError>;
