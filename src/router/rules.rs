//! Ordered keyword rules that classify a question.
//!
//! Classification happens in two stages. A question containing `commit`,
//! `branch` or `file` (exact case) goes to the Git rules; anything else goes
//! to the project rules, which compare against the lowercased question. In
//! each stage the first rule whose phrase is contained in the question wins.

/// What a question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ChangedFiles,
    LastCommit,
    Branches,
    CurrentBranch,
    /// Git-flavoured, but no Git rule matched.
    GitUnrecognized,
    ProjectSummary,
    SqlQueries,
    /// Nothing matched; answered with the fixed fallback message.
    Unrecognized,
}

/// Words that send a question to the Git rules. Matched case-sensitively.
pub const GIT_TRIGGERS: [&str; 3] = ["commit", "branch", "file"];

/// A phrase and the route it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub phrase: &'static str,
    pub route: Route,
}

impl Rule {
    const fn new(phrase: &'static str, route: Route) -> Self {
        Self { phrase, route }
    }
}

const PROJECT_RULES: [Rule; 2] = [
    Rule::new("what is this project about", Route::ProjectSummary),
    Rule::new("are there any sql queries", Route::SqlQueries),
];

/// Classifies questions against the Git and project rule lists.
#[derive(Debug, Clone)]
pub struct Router {
    git_rules: Vec<Rule>,
    project_rules: Vec<Rule>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Router {
    /// Build the rule lists.
    ///
    /// With `current_branch_first == false` the broad `branch` rule precedes
    /// `current branch`, which then can never fire. Passing `true` puts the
    /// narrower rule first.
    pub fn new(current_branch_first: bool) -> Self {
        let branches = Rule::new("branch", Route::Branches);
        let current = Rule::new("current branch", Route::CurrentBranch);
        let (first, second) =
            if current_branch_first { (current, branches) } else { (branches, current) };

        let git_rules = vec![
            Rule::new("files changed in last commit", Route::ChangedFiles),
            Rule::new("last commit", Route::LastCommit),
            first,
            second,
        ];

        Self { git_rules, project_rules: PROJECT_RULES.to_vec() }
    }

    pub fn is_git_question(question: &str) -> bool {
        GIT_TRIGGERS.iter().any(|word| question.contains(word))
    }

    pub fn classify(&self, question: &str) -> Route {
        if Self::is_git_question(question) {
            return first_match(&self.git_rules, question).unwrap_or(Route::GitUnrecognized);
        }

        let lowered = question.to_lowercase();
        first_match(&self.project_rules, &lowered).unwrap_or(Route::Unrecognized)
    }

    /// Rules shadowed by an earlier rule whose phrase they contain. Any
    /// question matching one of these matches the earlier rule first.
    pub fn unreachable_rules(&self) -> Vec<Rule> {
        let mut rules = shadowed(&self.git_rules);
        rules.extend(shadowed(&self.project_rules));
        rules
    }
}

fn first_match(rules: &[Rule], text: &str) -> Option<Route> {
    rules.iter().find(|rule| text.contains(rule.phrase)).map(|rule| rule.route)
}

fn shadowed(rules: &[Rule]) -> Vec<Rule> {
    rules
        .iter()
        .enumerate()
        .filter(|(idx, rule)| {
            rules[..*idx].iter().any(|earlier| rule.phrase.contains(earlier.phrase))
        })
        .map(|(_, rule)| *rule)
        .collect()
}
