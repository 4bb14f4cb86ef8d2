//! The two duplicate search algorithms.
//!
//! # Overview
//!
//! Both functions partition a file list into groups of mutually identical
//! content, discarding files with no duplicate. They must agree on which
//! files are duplicated, but they deliberately differ in how many groups
//! they emit:
//!
//! - [`search`] is the reference implementation: seed-and-sweep over the
//!   input, one [`ContentComparer::contents_equal`] call per remaining pair,
//!   exactly one group per duplicate set.
//! - [`faster_search`] prunes files whose size is unique among all inputs
//!   before any content comparison, then builds the full match list for
//!   every surviving candidate independently. A duplicate set of k files
//!   therefore appears k times in the result, once seeded from each member.
//!   The redundancy is preserved rather than normalized: the report only
//!   reads maxima, so both algorithms print the same thing, and collapsing
//!   the duplicates here would mask a real difference in emitted work when
//!   the two implementations are measured against each other.
//!
//! Neither function touches the filesystem itself; all content access goes
//! through the [`ContentComparer`] seam.

use std::collections::HashMap;

use crate::duplicates::groups::DuplicateGroup;
use crate::scanner::{CompareError, ContentComparer, FileEntry};

/// Errors that can occur during a duplicate search.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// A content comparison failed. The run is aborted; there is no notion
    /// of a partial grouping result.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Counters describing a completed search pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of files in the input list.
    pub total_files: usize,
    /// Number of `contents_equal` calls made.
    pub comparisons: usize,
    /// Files skipped before any comparison because their size was unique
    /// (always 0 for the reference search).
    pub pruned_unique_size: usize,
}

/// Reference duplicate search: naive pairwise comparison.
///
/// Repeatedly takes the first not-yet-grouped file as a seed and compares it
/// against every later not-yet-grouped file. Matches join the seed's group
/// in input order. Groups that end up with more than one member are
/// recorded; singletons are discarded.
///
/// The original formulation consumed its input destructively while scanning
/// it. This version scans an immutable snapshot with a parallel `consumed`
/// marker vector, which yields identical grouping without mutate-while-
/// iterate hazards.
///
/// # Arguments
///
/// * `files` - Files to search, in enumeration order
/// * `comparer` - Content equality oracle
///
/// # Errors
///
/// The first [`CompareError`] aborts the search; no groups are returned.
///
/// # Example
///
/// ```no_run
/// use dupescan::duplicates::search;
/// use dupescan::scanner::{FsComparer, Walker};
/// use std::path::Path;
///
/// let files = Walker::new(Path::new("images")).walk().unwrap();
/// let (groups, stats) = search(&files, &FsComparer::new()).unwrap();
/// println!("{} groups after {} comparisons", groups.len(), stats.comparisons);
/// ```
pub fn search(
    files: &[FileEntry],
    comparer: &dyn ContentComparer,
) -> Result<(Vec<DuplicateGroup>, SearchStats), FinderError> {
    let mut stats = SearchStats {
        total_files: files.len(),
        ..SearchStats::default()
    };
    let mut groups = Vec::new();
    let mut consumed = vec![false; files.len()];

    for i in 0..files.len() {
        if consumed[i] {
            continue;
        }
        consumed[i] = true;

        let mut members = vec![files[i].clone()];
        for j in (i + 1)..files.len() {
            if consumed[j] {
                continue;
            }
            stats.comparisons += 1;
            if comparer.contents_equal(&files[i].path, &files[j].path)? {
                consumed[j] = true;
                members.push(files[j].clone());
            }
        }

        if members.len() > 1 {
            log::debug!(
                "Duplicate group seeded by {}: {} members",
                members[0].path.display(),
                members.len()
            );
            groups.push(DuplicateGroup::new(members));
        }
    }

    Ok((groups, stats))
}

/// Optimized duplicate search: size pre-filter, then per-candidate sweeps.
///
/// A file whose size occurs only once in the input cannot have a duplicate,
/// so it is pruned without ever being opened. Every surviving candidate is
/// then compared against every candidate (itself included; a file trivially
/// equals itself), and its full match list is recorded as a group whenever
/// it contains more than one file.
///
/// Because each candidate emits its own match list, a true duplicate set of
/// k files produces k groups with identical membership. See the module docs
/// for why this divergence from [`search`] is kept.
///
/// # Arguments
///
/// * `files` - Files to search, in enumeration order (read-only)
/// * `comparer` - Content equality oracle
///
/// # Errors
///
/// The first [`CompareError`] aborts the search; no groups are returned.
pub fn faster_search(
    files: &[FileEntry],
    comparer: &dyn ContentComparer,
) -> Result<(Vec<DuplicateGroup>, SearchStats), FinderError> {
    let mut stats = SearchStats {
        total_files: files.len(),
        ..SearchStats::default()
    };

    // Count every size once; candidates keep their input order.
    let mut size_counts: HashMap<u64, usize> = HashMap::new();
    for file in files {
        *size_counts.entry(file.size).or_insert(0) += 1;
    }

    let candidates: Vec<&FileEntry> = files
        .iter()
        .filter(|f| size_counts[&f.size] > 1)
        .collect();
    stats.pruned_unique_size = files.len() - candidates.len();
    log::debug!(
        "Size pre-filter kept {} of {} files",
        candidates.len(),
        files.len()
    );

    let mut groups = Vec::new();
    for seed in &candidates {
        let mut members = Vec::new();
        for other in &candidates {
            stats.comparisons += 1;
            if comparer.contents_equal(&seed.path, &other.path)? {
                members.push((*other).clone());
            }
        }
        if members.len() > 1 {
            groups.push(DuplicateGroup::new(members));
        }
    }

    Ok((groups, stats))
}
