//! Shared helpers.

pub mod encoding;
pub mod paths;

pub use encoding::{decode_lossy, read_file_lossy};
pub use paths::normalize_path;
