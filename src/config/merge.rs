//! Command-line overrides layered on top of file and environment config.

use serde::Serialize;
use std::path::PathBuf;

/// Values given on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
