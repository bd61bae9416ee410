//! Lexical SQL detection.
//!
//! A file is flagged when any of `SELECT`, `INSERT`, `UPDATE` or `DELETE`
//! (any letter case) is immediately followed by a whitespace character.
//! This is a heuristic, not a parser: prose such as "please select a file"
//! is flagged, while `INSERT(` or `select;` is not. There are no word
//! boundaries either, so `reselect ` matches.

use crate::domain::{CodeFile, SqlMatch};
use once_cell::sync::Lazy;
use regex::Regex;

pub static SQL_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(SELECT|INSERT|UPDATE|DELETE)\s").expect("valid regex"));

/// True when `content` contains at least one SQL-looking keyword.
pub fn looks_like_sql(content: &str) -> bool {
    SQL_STATEMENT.is_match(content)
}

/// Return the files whose content looks like it contains SQL, in input order.
pub fn detect_sql(files: &[CodeFile]) -> Vec<SqlMatch> {
    files
        .iter()
        .filter(|file| looks_like_sql(&file.content))
        .map(|file| SqlMatch { path: file.path.clone(), content: file.content.clone() })
        .collect()
}
