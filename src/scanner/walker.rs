//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting metadata for every regular file found. The walk is
//! single-threaded and depth-first; symbolic links are not followed, and
//! anything that is not a regular file (directories, symlinks, sockets) is
//! skipped.
//!
//! Unlike scanners that tolerate partially unreadable trees, the walker
//! aborts on the first I/O error. The search algorithms downstream have no
//! notion of a partial result, so an incomplete file list would silently
//! produce a wrong report.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use std::path::Path;
//!
//! let files = Walker::new(Path::new("images")).walk().unwrap();
//! println!("found {} files", files.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Recursive directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Walk the directory tree and collect all regular files.
    ///
    /// Files are returned in the order walkdir yields them (depth-first,
    /// directory entries in OS order). The size of each file is read once
    /// here and carried in the returned [`FileEntry`] values.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] or [`ScanError::NotADirectory`] if the
    /// root is unusable, and [`ScanError::Io`] for any error encountered
    /// while traversing or reading metadata. The first error aborts the walk.
    pub fn walk(&self) -> Result<Vec<FileEntry>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf);
                match e.into_io_error() {
                    Some(source) => ScanError::Io { path, source },
                    None => ScanError::NotFound(path),
                }
            })?;

            // Regular files only; walkdir reports symlinks as symlinks
            // because follow_links is off.
            if !entry.file_type().is_file() {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                let path = entry.path().to_path_buf();
                match e.into_io_error() {
                    Some(source) => ScanError::Io { path, source },
                    None => ScanError::NotFound(path),
                }
            })?;

            log::trace!("Discovered {} ({} bytes)", entry.path().display(), metadata.len());
            files.push(FileEntry::new(entry.path().to_path_buf(), metadata.len()));
        }

        log::debug!("Walk of {} found {} files", self.root.display(), files.len());
        Ok(files)
    }
}
