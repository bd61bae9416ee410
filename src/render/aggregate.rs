//! Codebase aggregation for summarization prompts.

use crate::domain::CodeFile;

/// Concatenate every file's content, each followed by a newline, in the
/// order given. No size limit is applied here.
pub fn aggregate(files: &[CodeFile]) -> String {
    let capacity = files.iter().map(|f| f.content.len() + 1).sum();
    let mut blob = String::with_capacity(capacity);
    for file in files {
        blob.push_str(&file.content);
        blob.push('\n');
    }
    blob
}

/// Keep the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
