//! Plain-text answer wording.

use crate::domain::{CommitSummary, SqlMatch};

pub const FALLBACK_MESSAGE: &str =
    "I couldn't understand your query. Try asking something else related to the project or commits.";

pub const NO_SQL_MESSAGE: &str = "No SQL queries found in the project.";

pub const SUMMARY_CONTEXT: &str =
    "This is the source code of a software project. Summarize what the project is about.";

pub fn changed_files(paths: &[String]) -> String {
    format!("The following files were changed in the last commit: {}", paths.join(", "))
}

pub fn last_commit(summary: &CommitSummary) -> String {
    format!(
        "The last commit was made by {} with the message: '{}'",
        summary.author, summary.message
    )
}

pub fn branches(names: &[String]) -> String {
    format!("The current branches are: {}", names.join(", "))
}

pub fn current_branch(name: &str) -> String {
    format!("The current branch is: {name}")
}

/// One matched path per line under a heading, or the "none found" message.
pub fn sql_matches(matches: &[SqlMatch]) -> String {
    if matches.is_empty() {
        return NO_SQL_MESSAGE.to_string();
    }
    let paths: Vec<String> = matches.iter().map(|m| m.path.display().to_string()).collect();
    format!("SQL queries found in the following files:\n{}", paths.join("\n"))
}

pub fn summary_question(context: &str) -> String {
    format!("Summarize this project: {context}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sql_matches_lists_paths() {
        let matches = vec![
            SqlMatch { path: PathBuf::from("/r/a.sql"), content: String::new() },
            SqlMatch { path: PathBuf::from("/r/b.py"), content: String::new() },
        ];
        assert_eq!(
            sql_matches(&matches),
            "SQL queries found in the following files:\n/r/a.sql\n/r/b.py"
        );
    }

    #[test]
    fn test_sql_matches_none() {
        assert_eq!(sql_matches(&[]), NO_SQL_MESSAGE);
    }

    #[test]
    fn test_last_commit_wording() {
        let summary = CommitSummary { author: "Ada".into(), message: "Fix loader".into() };
        assert_eq!(
            last_commit(&summary),
            "The last commit was made by Ada with the message: 'Fix loader'"
        );
    }

    #[test]
    fn test_list_wording() {
        assert_eq!(
            branches(&["main".into(), "dev".into()]),
            "The current branches are: main, dev"
        );
        assert_eq!(
            changed_files(&["a.py".into(), "b.sql".into()]),
            "The following files were changed in the last commit: a.py, b.sql"
        );
    }
}
