//! Best-effort text decoding for scanned files.
//!
//! Source files are read as UTF-8. Byte sequences that are not valid UTF-8
//! are dropped rather than replaced, so a stray Latin-1 byte in an old script
//! never costs the whole file. A leading BOM is valid UTF-8 and is kept.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a file and decode it, dropping undecodable bytes.
///
/// Only I/O failures (missing file, permission denied) are errors.
pub fn read_file_lossy(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(decode_lossy(&bytes))
}

/// Decode bytes as UTF-8, skipping every invalid sequence.
pub fn decode_lossy(bytes: &[u8]) -> String {
    // Fast path: most repositories are clean UTF-8.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    decoded
}
