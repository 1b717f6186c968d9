//! `helm dependency list` output
//!
//! helm prints a header row followed by one tab-separated row per
//! dependency, in `Chart.yaml` order:
//!
//! ```text
//! NAME        VERSION REPOSITORY                  STATUS
//! dependency  *.*.*   file://../dependency        ok
//! ```
//!
//! Warnings about unlisted or missing charts are interleaved as plain
//! `WARNING: ...` lines.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

pub const STATUS_OK: &str = "ok";
pub const STATUS_MISSING: &str = "missing";

const FIELD_COUNT: usize = 4;

/// One row of `helm dependency list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    pub repository: String,
    /// `ok`, `missing`, `unpacked`, `wrong version`, ...
    pub status: String,
}

impl DependencyRecord {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn is_missing(&self) -> bool {
        self.status == STATUS_MISSING
    }
}

/// Parse the tabular output of `helm dependency list`
pub fn parse_dependency_list(output: &str) -> Result<Vec<DependencyRecord>> {
    let mut records = Vec::new();

    for (idx, line) in output.lines().enumerate().skip(1) {
        if line.trim().is_empty() || line.trim_start().starts_with("WARNING:") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < FIELD_COUNT {
            return Err(ParseError::Table {
                line: idx + 1,
                message: format!(
                    "expected {} tab-separated fields, found {}",
                    FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        records.push(DependencyRecord {
            name: fields[0].to_string(),
            version: fields[1].to_string(),
            repository: fields[2].to_string(),
            status: fields[3].to_string(),
        });
    }

    Ok(records)
}
