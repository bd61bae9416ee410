//! Path normalization

use std::path::Path;

/// Render a repository-relative path with forward slashes on every platform.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
