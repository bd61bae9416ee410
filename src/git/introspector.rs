//! Read-only repository introspection.

use crate::domain::CommitSummary;
use crate::utils::normalize_path;
use git2::{BranchType, Commit, ErrorCode, Repository};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The repository could not resolve a requested fact.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to open git repository at {path}: {source}")]
    Open { path: PathBuf, source: git2::Error },

    #[error("the repository has no commits yet")]
    NoCommits,

    #[error("HEAD is detached; no branch is checked out")]
    NoActiveBranch,

    #[error(transparent)]
    Backend(#[from] git2::Error),
}

/// Answers questions about commits and branches from a repository handle
/// opened once at startup. Every call re-reads repository state.
pub struct GitIntrospector {
    repo: Repository,
}

impl GitIntrospector {
    /// Open the repository rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .map_err(|source| GitError::Open { path: path.to_path_buf(), source })?;

        tracing::info!("Opened git repository at: {}", path.display());
        Ok(Self { repo })
    }

    fn head_commit(&self) -> Result<Commit<'_>, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(GitError::NoCommits)
            }
            Err(e) => return Err(e.into()),
        };
        Ok(head.peel_to_commit()?)
    }

    /// Paths touched by the most recent commit, relative to the repository
    /// root. The root commit is diffed against the empty tree.
    pub fn last_commit_changed_files(&self) -> Result<Vec<String>, GitError> {
        let commit = self.head_commit()?;
        let tree = commit.tree()?;
        let parent_tree =
            if commit.parent_count() > 0 { Some(commit.parent(0)?.tree()?) } else { None };

        let diff = self.repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let path = delta.new_file().path().or_else(|| delta.old_file().path());
            if let Some(path) = path {
                let path = normalize_path(path);
                if !files.contains(&path) {
                    files.push(path);
                }
            }
        }
        Ok(files)
    }

    /// Author name and whitespace-trimmed message of the most recent commit.
    pub fn last_commit_summary(&self) -> Result<CommitSummary, GitError> {
        let commit = self.head_commit()?;
        let author = commit.author();
        let author = author.name().unwrap_or("Unknown").to_string();
        let message = String::from_utf8_lossy(commit.message_bytes()).trim().to_string();
        Ok(CommitSummary { author, message })
    }

    /// Local branch names in the order the backend reports them.
    pub fn list_branches(&self) -> Result<Vec<String>, GitError> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Name of the checked-out branch.
    ///
    /// Works on an unborn branch (fresh repository) by reading the symbolic
    /// HEAD; a detached HEAD yields [`GitError::NoActiveBranch`].
    pub fn active_branch_name(&self) -> Result<String, GitError> {
        if self.repo.head_detached()? {
            return Err(GitError::NoActiveBranch);
        }
        let head = self.repo.find_reference("HEAD")?;
        let target = head.symbolic_target().ok_or(GitError::NoActiveBranch)?;
        Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
    }
}
