//! File content comparison.
//!
//! The search algorithms in [`crate::duplicates`] never touch the filesystem
//! directly; they go through the [`ContentComparer`] trait. The production
//! implementation is [`FsComparer`], which streams both files through fixed
//! size buffers and bails out on the first differing chunk. Tests substitute
//! an in-memory comparer so grouping semantics can be exercised without
//! temp files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::CompareError;

/// Buffer size for streaming comparison.
const COMPARE_BUF_SIZE: usize = 64 * 1024;

/// Byte-content equality between two files.
///
/// `contents_equal` must be reflexive and symmetric, and for byte equality it
/// is also transitive, which is what lets the search algorithms partition
/// files into clean equivalence classes with a seed-and-sweep scan.
pub trait ContentComparer {
    /// Check whether two files have identical byte content.
    ///
    /// # Errors
    ///
    /// Fails with a [`CompareError`] if either file cannot be read. Errors
    /// are never swallowed; the caller decides what a failed comparison
    /// means (for the search algorithms it aborts the whole run).
    fn contents_equal(&self, a: &Path, b: &Path) -> Result<bool, CompareError>;
}

/// Filesystem-backed [`ContentComparer`].
///
/// Opens both files and compares their content chunk by chunk. Files of
/// different length compare unequal without reading any content bytes.
#[derive(Debug, Default)]
pub struct FsComparer;

impl FsComparer {
    /// Create a new filesystem comparer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContentComparer for FsComparer {
    fn contents_equal(&self, a: &Path, b: &Path) -> Result<bool, CompareError> {
        let file_a = File::open(a).map_err(|e| CompareError::from_io(a, e))?;
        let file_b = File::open(b).map_err(|e| CompareError::from_io(b, e))?;

        // Length mismatch means unequal; no need to read content.
        let len_a = file_a
            .metadata()
            .map_err(|e| CompareError::from_io(a, e))?
            .len();
        let len_b = file_b
            .metadata()
            .map_err(|e| CompareError::from_io(b, e))?
            .len();
        if len_a != len_b {
            return Ok(false);
        }

        let mut reader_a = BufReader::with_capacity(COMPARE_BUF_SIZE, file_a);
        let mut reader_b = BufReader::with_capacity(COMPARE_BUF_SIZE, file_b);

        loop {
            let chunk_a = reader_a
                .fill_buf()
                .map_err(|e| CompareError::from_io(a, e))?;
            let chunk_b = reader_b
                .fill_buf()
                .map_err(|e| CompareError::from_io(b, e))?;

            if chunk_a.is_empty() && chunk_b.is_empty() {
                return Ok(true);
            }

            // The readers may buffer different amounts; compare the common
            // prefix and consume only that much from each.
            let n = chunk_a.len().min(chunk_b.len());
            if n == 0 {
                // One stream ended early: the file changed under us.
                return Ok(false);
            }
            if chunk_a[..n] != chunk_b[..n] {
                return Ok(false);
            }

            reader_a.consume(n);
            reader_b.consume(n);
        }
    }
}
