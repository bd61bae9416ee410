//! git-chat: ask natural-language questions about a Git repository
//!
//! Git questions (commits, branches, changed files) are answered directly
//! from repository metadata. Project questions are answered by scanning the
//! source tree, either locally (SQL detection) or through a completion
//! service fed with the concatenated sources.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod git;
pub mod llm;
pub mod render;
pub mod router;
pub mod scan;
pub mod utils;
