//! Source file scanning

use crate::domain::CodeFile;
use std::path::Path;

pub mod scanner;

pub use scanner::RepoScanner;

/// Scan `root` and read every source file found.
pub fn scan_repository<P: AsRef<Path>>(root: P) -> Vec<CodeFile> {
    let mut scanner = RepoScanner::new(root.as_ref().to_path_buf());
    let files = scanner.read_files();
    let stats = scanner.stats();
    tracing::debug!(
        "Scan finished: {} visited, {} matched, {} unreadable",
        stats.files_visited,
        stats.files_matched,
        stats.files_unreadable
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_scan_repository_logs_stats() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.py"), "x = 1").unwrap();
        fs::write(root.join("b.sql"), "SELECT 1").unwrap();
        fs::write(root.join("notes.txt"), "skip").unwrap();

        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let files = tracing::subscriber::with_default(subscriber, || scan_repository(root));

        assert_eq!(files.len(), 2);
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("Scan finished: 3 visited, 2 matched, 0 unreadable"),
            "got: {output}"
        );
    }
}
