//! Recursive source file discovery.

use crate::domain::{CodeFile, ScanStats, SOURCE_EXTENSIONS};
use crate::utils::read_file_lossy;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks a repository tree and collects files with a known source extension.
pub struct RepoScanner {
    root_path: PathBuf,
    extensions: Vec<String>,
    stats: ScanStats,
}

impl RepoScanner {
    /// Create a scanner over `root_path` using [`SOURCE_EXTENSIONS`].
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            extensions: SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            stats: ScanStats::default(),
        }
    }

    /// Match on the file name suffix, case-sensitively. A file named just
    /// `.py` counts too.
    fn has_source_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Return every source file under the root, at any depth.
    ///
    /// Order follows the walk and is not guaranteed to be stable across
    /// filesystems. Entries the walk cannot access are skipped. Symlinks to
    /// files are returned; symlinked directories are not descended into.
    pub fn scan(&mut self) -> Vec<PathBuf> {
        self.stats = ScanStats::default();

        let walker = WalkDir::new(&self.root_path).follow_links(false).into_iter();

        let mut files = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            // Symlinks count as files unless they resolve to a directory.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && !entry.path().is_dir());
            if !is_file {
                continue;
            }
            self.stats.files_visited += 1;

            if !self.has_source_extension(entry.path()) {
                continue;
            }
            self.stats.files_matched += 1;
            files.push(entry.into_path());
        }

        tracing::debug!("Scanned {} source files: {:?}", files.len(), files);
        files
    }

    /// Scan and read every source file, skipping the ones that cannot be read.
    pub fn read_files(&mut self) -> Vec<CodeFile> {
        let paths = self.scan();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match read_file_lossy(&path) {
                Ok(content) => files.push(CodeFile { path, content }),
                Err(err) => {
                    tracing::warn!("{:#}", err);
                    self.stats.files_unreadable += 1;
                }
            }
        }
        files
    }

    /// Get scanning statistics for the most recent scan
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}
