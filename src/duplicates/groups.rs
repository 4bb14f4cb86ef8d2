//! Duplicate group management.
//!
//! A [`DuplicateGroup`] is an ordered list of files that all have identical
//! byte content. The first member is the seed the search discovered the
//! group through; the report treats it as "the original" and the remaining
//! members as its copies.

use std::path::PathBuf;

use crate::scanner::FileEntry;

/// A group of files with identical content.
///
/// Groups produced by the reference search always have at least two members
/// and every file appears in at most one group. The optimized search emits
/// one group per member of a duplicate set (see [`crate::duplicates::finder`]),
/// so its result may contain overlapping groups with identical membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Files in this group; the seed file is first.
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    ///
    /// # Arguments
    ///
    /// * `files` - Member files, seed first
    #[must_use]
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total size of all files in this group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Space reclaimed by deleting every copy and keeping the seed.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        if self.files.len() > 1 {
            self.total_size().saturating_sub(self.files[0].size)
        } else {
            0
        }
    }

    /// Number of duplicate copies (total minus the seed).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(path: &str, size: u64) -> FileEntry {
        FileEntry::new(PathBuf::from(path), size)
    }

    #[test]
    fn test_group_len_and_count() {
        let group = DuplicateGroup::new(vec![
            make_file("/a.txt", 1000),
            make_file("/b.txt", 1000),
            make_file("/c.txt", 1000),
        ]);

        assert_eq!(group.len(), 3);
        assert_eq!(group.duplicate_count(), 2);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_group_total_size() {
        let group = DuplicateGroup::new(vec![
            make_file("/a.txt", 1000),
            make_file("/b.txt", 1000),
        ]);

        assert_eq!(group.total_size(), 2000);
    }

    #[test]
    fn test_group_wasted_space() {
        let group = DuplicateGroup::new(vec![
            make_file("/a.txt", 1000),
            make_file("/b.txt", 1000),
            make_file("/c.txt", 1000),
        ]);

        // Keeping the seed frees 2 * 1000
        assert_eq!(group.wasted_space(), 2000);
    }

    #[test]
    fn test_single_file_group_has_no_waste() {
        let group = DuplicateGroup::new(vec![make_file("/a.txt", 1000)]);

        assert_eq!(group.wasted_space(), 0);
        assert_eq!(group.duplicate_count(), 0);
    }

    #[test]
    fn test_group_paths() {
        let group = DuplicateGroup::new(vec![
            make_file("/a.txt", 10),
            make_file("/b.txt", 10),
        ]);

        assert_eq!(
            group.paths(),
            vec![PathBuf::from("/a.txt"), PathBuf::from("/b.txt")]
        );
    }
}
