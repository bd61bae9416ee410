//! Content analysis over scanned files.

pub mod sql;

pub use sql::{detect_sql, looks_like_sql};
