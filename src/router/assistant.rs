//! Dispatches classified questions to the repository and the completion service.

use super::rules::{Route, Router};
use crate::analysis::detect_sql;
use crate::domain::{Answer, PROJECT_CONTEXT_CHARS};
use crate::git::{GitError, GitIntrospector};
use crate::llm::{CompletionClient, LlmError};
use crate::render::{aggregate, answer, truncate_chars};
use crate::scan::scan_repository;
use std::path::PathBuf;

/// Owns the collaborators needed to answer one question at a time.
///
/// Nothing is cached: every call re-reads the filesystem and the repository.
pub struct Assistant<C> {
    router: Router,
    git: GitIntrospector,
    scan_root: PathBuf,
    llm: C,
}

impl<C: CompletionClient> Assistant<C> {
    pub fn new(router: Router, git: GitIntrospector, scan_root: PathBuf, llm: C) -> Self {
        Self { router, git, scan_root, llm }
    }

    /// Answer one question.
    ///
    /// Repository failures become [`Answer::RepositoryState`]; a completion
    /// service failure is returned as an error for the caller to handle.
    pub fn answer(&self, question: &str) -> Result<Answer, LlmError> {
        let route = self.router.classify(question);
        tracing::debug!(?route, question, "Classified question");

        let reply = match route {
            Route::ChangedFiles => {
                git_answer(self.git.last_commit_changed_files().map(|f| answer::changed_files(&f)))
            }
            Route::LastCommit => {
                git_answer(self.git.last_commit_summary().map(|s| answer::last_commit(&s)))
            }
            Route::Branches => git_answer(self.git.list_branches().map(|b| answer::branches(&b))),
            Route::CurrentBranch => {
                git_answer(self.git.active_branch_name().map(|n| answer::current_branch(&n)))
            }
            Route::GitUnrecognized => Answer::Unrecognized,
            Route::ProjectSummary => Answer::Text(self.summarize_project()?),
            Route::SqlQueries => {
                let files = scan_repository(&self.scan_root);
                Answer::Text(answer::sql_matches(&detect_sql(&files)))
            }
            Route::Unrecognized => Answer::Text(answer::FALLBACK_MESSAGE.to_string()),
        };
        Ok(reply)
    }

    fn summarize_project(&self) -> Result<String, LlmError> {
        let files = scan_repository(&self.scan_root);
        let blob = aggregate(&files);
        let excerpt = truncate_chars(&blob, PROJECT_CONTEXT_CHARS);
        tracing::info!(
            files = files.len(),
            chars = excerpt.chars().count(),
            provider = self.llm.name(),
            "Summarizing project"
        );
        self.llm.complete(&answer::summary_question(excerpt), answer::SUMMARY_CONTEXT)
    }
}

fn git_answer(result: Result<String, GitError>) -> Answer {
    match result {
        Ok(text) => Answer::Text(text),
        Err(err) => {
            tracing::warn!("Repository query failed: {}", err);
            Answer::RepositoryState(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Records every request and replies with a canned result.
    struct FakeCompletion {
        reply: Result<String, u16>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeCompletion {
        fn replying(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), calls: RefCell::new(Vec::new()) }
        }

        fn failing(status: u16) -> Self {
            Self { reply: Err(status), calls: RefCell::new(Vec::new()) }
        }
    }

    impl CompletionClient for FakeCompletion {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn complete(&self, question: &str, context: &str) -> Result<String, LlmError> {
            self.calls.borrow_mut().push((question.to_string(), context.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Status { status: *status, body: "boom".to_string() }),
            }
        }
    }

    fn repo_with_commit(dir: &Path, files: &[(&str, &str)]) {
        let repo = Repository::init(dir).unwrap();
        repo.set_head("refs/heads/main").unwrap();
        let mut index = repo.index().unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
            index.add_path(Path::new(name)).unwrap();
        }
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Grace Hopper", "grace@example.com").unwrap();
        let oid = repo.commit(Some("HEAD"), &sig, &sig, "Add ETL job\n", &tree, &[]).unwrap();
        let commit = repo.find_commit(oid).unwrap();
        repo.branch("dev", &commit, false).unwrap();
    }

    fn assistant(
        dir: &Path,
        llm: FakeCompletion,
        current_branch_first: bool,
    ) -> Assistant<FakeCompletion> {
        let git = GitIntrospector::open(dir).unwrap();
        Assistant::new(Router::new(current_branch_first), git, dir.to_path_buf(), llm)
    }

    #[test]
    fn test_sql_question_lists_only_sql_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        repo_with_commit(
            &root,
            &[("a.py", "def f():\n    return 1"), ("b.sql", "SELECT * FROM t")],
        );

        let bot = assistant(&root, FakeCompletion::replying("unused"), false);
        let reply = bot.answer("are there any sql queries").unwrap();

        let expected = format!(
            "SQL queries found in the following files:\n{}",
            root.join("b.sql").display()
        );
        assert_eq!(reply, Answer::Text(expected));
        assert!(bot.llm.calls.borrow().is_empty());
    }

    #[test]
    fn test_sql_question_none_found() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1")]);

        let bot = assistant(temp.path(), FakeCompletion::replying("unused"), false);
        assert_eq!(
            bot.answer("Are there any SQL queries?").unwrap(),
            Answer::Text(answer::NO_SQL_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_project_summary_sends_truncated_context() {
        let temp = TempDir::new().unwrap();
        let big = "x".repeat(5000);
        repo_with_commit(temp.path(), &[("big.py", big.as_str())]);

        let bot = assistant(temp.path(), FakeCompletion::replying("An ETL project."), false);
        let reply = bot.answer("what is this project about").unwrap();
        assert_eq!(reply, Answer::Text("An ETL project.".to_string()));

        let calls = bot.llm.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (question, context) = &calls[0];
        assert_eq!(question, &format!("Summarize this project: {}", "x".repeat(2000)));
        assert_eq!(context, answer::SUMMARY_CONTEXT);
    }

    #[test]
    fn test_project_summary_propagates_service_error() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1")]);

        let bot = assistant(temp.path(), FakeCompletion::failing(503), false);
        let err = bot.answer("What is this project about").unwrap_err();
        assert!(matches!(err, LlmError::Status { status: 503, .. }));
    }

    #[test]
    fn test_git_answers() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1"), ("b.sql", "SELECT 1")]);
        let bot = assistant(temp.path(), FakeCompletion::replying("unused"), false);

        assert_eq!(
            bot.answer("files changed in last commit").unwrap().to_string(),
            "The following files were changed in the last commit: a.py, b.sql"
        );
        assert_eq!(
            bot.answer("who wrote the last commit").unwrap().to_string(),
            "The last commit was made by Grace Hopper with the message: 'Add ETL job'"
        );

        let branches = bot.answer("show the current branch").unwrap().to_string();
        assert!(branches.starts_with("The current branches are: "), "got: {branches}");
        assert!(branches.contains("main") && branches.contains("dev"));
    }

    #[test]
    fn test_current_branch_when_enabled() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1")]);
        let bot = assistant(temp.path(), FakeCompletion::replying("unused"), true);

        assert_eq!(
            bot.answer("what is the current branch").unwrap(),
            Answer::Text("The current branch is: main".to_string())
        );
    }

    #[test]
    fn test_detached_head_becomes_repository_state_answer() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1")]);
        let repo = Repository::open(temp.path()).unwrap();
        let head = repo.head().unwrap().target().unwrap();
        repo.set_head_detached(head).unwrap();

        let bot = assistant(temp.path(), FakeCompletion::replying("unused"), true);
        let reply = bot.answer("what is the current branch").unwrap();
        assert!(matches!(reply, Answer::RepositoryState(_)));
        assert!(reply.to_string().contains("detached"));
    }

    #[test]
    fn test_unrecognized_questions() {
        let temp = TempDir::new().unwrap();
        repo_with_commit(temp.path(), &[("a.py", "x = 1")]);
        let bot = assistant(temp.path(), FakeCompletion::replying("unused"), false);

        assert_eq!(bot.answer("file").unwrap(), Answer::Unrecognized);
        assert_eq!(
            bot.answer("tell me a joke").unwrap(),
            Answer::Text(answer::FALLBACK_MESSAGE.to_string())
        );
    }
}
