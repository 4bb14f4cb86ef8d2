//! Duplicate report rendering.
//!
//! Given a grouping result, the report names two groups:
//!
//! - the group with the most members (its seed is "the file with the most
//!   duplicates", the rest are its copies), and
//! - the group with the greatest total size, whose copies would reclaim the
//!   most disk space if deleted.
//!
//! Ties are broken by the first such group in the result's iteration order.
//! An empty result prints "No duplicates found" and skips both computations.
//! The redundant groups emitted by the optimized search are harmless here:
//! maxima over duplicated entries are unchanged, so both algorithms print
//! the same report.

use std::io::{self, Write};

use crate::duplicates::DuplicateGroup;

/// Find the group with the most members.
///
/// The first group with the maximal member count wins ties.
#[must_use]
pub fn most_duplicated(groups: &[DuplicateGroup]) -> Option<&DuplicateGroup> {
    let mut best: Option<&DuplicateGroup> = None;
    for group in groups {
        match best {
            Some(b) if group.len() <= b.len() => {}
            _ => best = Some(group),
        }
    }
    best
}

/// Find the group with the greatest total file size.
///
/// The first group with the maximal total size wins ties.
#[must_use]
pub fn largest_footprint(groups: &[DuplicateGroup]) -> Option<&DuplicateGroup> {
    let mut best: Option<&DuplicateGroup> = None;
    for group in groups {
        match best {
            Some(b) if group.total_size() <= b.total_size() => {}
            _ => best = Some(group),
        }
    }
    best
}

/// Write the duplicate report to the given writer.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(groups: &[DuplicateGroup], out: &mut W) -> io::Result<()> {
    writeln!(out, "== == Duplicate File Finder Report == ==")?;

    if groups.is_empty() {
        writeln!(out, "No duplicates found")?;
        return Ok(());
    }

    if let Some(most) = most_duplicated(groups) {
        writeln!(
            out,
            "The file with the most duplicates is {}",
            most.files[0].path.display()
        )?;
        writeln!(out, "Here are its {} copies:", most.duplicate_count())?;
        for copy in &most.files[1..] {
            writeln!(out, "{}", copy.path.display())?;
        }
    }

    if let Some(heaviest) = largest_footprint(groups) {
        writeln!(out)?;
        writeln!(
            out,
            "The most disk space ({} bytes) could be recovered by deleting copies of this file: {}",
            heaviest.wasted_space(),
            heaviest.files[0].path.display()
        )?;
        writeln!(out, "Here are its {} copies:", heaviest.duplicate_count())?;
        for copy in &heaviest.files[1..] {
            writeln!(out, "{}", copy.path.display())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileEntry;
    use std::path::PathBuf;

    fn group(entries: &[(&str, u64)]) -> DuplicateGroup {
        DuplicateGroup::new(
            entries
                .iter()
                .map(|&(p, s)| FileEntry::new(PathBuf::from(p), s))
                .collect(),
        )
    }

    fn render(groups: &[DuplicateGroup]) -> String {
        let mut buf = Vec::new();
        write_report(groups, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_result_reports_no_duplicates() {
        let output = render(&[]);
        assert!(output.contains("== == Duplicate File Finder Report == =="));
        assert!(output.contains("No duplicates found"));
    }

    #[test]
    fn test_most_duplicates_names_seed_and_copies() {
        let groups = vec![group(&[("A", 5), ("C", 5), ("D", 5)]), group(&[("X", 9), ("Y", 9)])];
        let output = render(&groups);

        assert!(output.contains("The file with the most duplicates is A"));
        assert!(output.contains("Here are its 2 copies:"));
        assert!(output.contains("\nC\n"));
        assert!(output.contains("\nD\n"));
    }

    #[test]
    fn test_reclaimable_space_excludes_the_seed() {
        // Footprint winner: 3 files of 100 bytes; deleting copies frees 200
        let groups = vec![
            group(&[("big1", 100), ("big2", 100), ("big3", 100)]),
            group(&[("small1", 10), ("small2", 10)]),
        ];
        let output = render(&groups);

        assert!(output.contains(
            "The most disk space (200 bytes) could be recovered by deleting copies of this file: big1"
        ));
    }

    #[test]
    fn test_footprint_winner_differs_from_most_duplicated() {
        // More members in the first group, more bytes in the second
        let groups = vec![
            group(&[("many1", 1), ("many2", 1), ("many3", 1), ("many4", 1)]),
            group(&[("huge1", 1000), ("huge2", 1000)]),
        ];
        let output = render(&groups);

        assert!(output.contains("The file with the most duplicates is many1"));
        assert!(output.contains(
            "could be recovered by deleting copies of this file: huge1"
        ));
    }

    #[test]
    fn test_tie_break_takes_first_group() {
        let groups = vec![
            group(&[("first1", 10), ("first2", 10)]),
            group(&[("second1", 10), ("second2", 10)]),
        ];

        assert_eq!(
            most_duplicated(&groups).unwrap().files[0].path,
            PathBuf::from("first1")
        );
        assert_eq!(
            largest_footprint(&groups).unwrap().files[0].path,
            PathBuf::from("first1")
        );
    }

    #[test]
    fn test_selectors_on_empty_slice() {
        assert!(most_duplicated(&[]).is_none());
        assert!(largest_footprint(&[]).is_none());
    }

    #[test]
    fn test_redundant_optimized_groups_do_not_change_report() {
        // faster_search emits one group per member of a duplicate set;
        // duplicated maxima must not change what gets printed
        let canonical = vec![group(&[("A", 5), ("B", 5)])];
        let redundant = vec![group(&[("A", 5), ("B", 5)]), group(&[("A", 5), ("B", 5)])];

        assert_eq!(render(&canonical), render(&redundant));
    }
}
