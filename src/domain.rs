//! Core data types shared across the assistant.
//!
//! Everything here is transient: values are rebuilt from the filesystem or
//! the repository on every query and dropped once the answer is printed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// File extensions picked up by the repository scanner.
pub const SOURCE_EXTENSIONS: [&str; 4] = [".py", ".sql", ".js", ".java"];

/// Number of characters of aggregated source handed to the completion service
/// when summarizing the project.
pub const PROJECT_CONTEXT_CHARS: usize = 2000;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Runtime configuration after all layers are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the repository to introspect.
    pub repo_path: PathBuf,
    /// Dotenv file holding `OPENAI_API_KEY`.
    pub env_file: Option<PathBuf>,
    pub model: String,
    pub api_base: String,
    /// Unset means the completion request may block indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// Check "current branch" before the broader "branch" rule.
    pub current_branch_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            env_file: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: None,
            current_branch_first: false,
        }
    }
}

/// A scanned source file: absolute path plus its decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    pub path: PathBuf,
    pub content: String,
}

impl CodeFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// A file whose content looks like it contains a SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlMatch {
    pub path: PathBuf,
    pub content: String,
}

/// Author and trimmed message of the most recent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub author: String,
    pub message: String,
}

/// Counters collected during one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Every file visited by the walk, symlinks to files included.
    pub files_visited: usize,
    /// Files whose name carries one of [`SOURCE_EXTENSIONS`].
    pub files_matched: usize,
    /// Matched files that could not be read and were skipped.
    pub files_unreadable: usize,
}

/// Result of one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Text produced locally or returned by the completion service.
    Text(String),
    /// A Git-flavoured question that matched no known sub-case.
    Unrecognized,
    /// The repository could not resolve the requested fact.
    RepositoryState(String),
    /// The completion service failed; the loop keeps going.
    RemoteService(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => f.write_str(text),
            Answer::Unrecognized => f.write_str(
                "I couldn't match that to a Git question. Try asking about the last commit, \
                 the files changed in the last commit, or the branches.",
            ),
            Answer::RepositoryState(cause) => {
                write!(f, "Could not read repository state: {cause}")
            }
            Answer::RemoteService(cause) => {
                write!(f, "Could not get an answer from the completion service: {cause}")
            }
        }
    }
}
