//! dupescan - Duplicate File Finder
//!
//! A cross-platform Rust CLI application that scans a directory tree for files
//! with identical content (duplicates may have entirely different names) and
//! reports the file with the most copies plus the group whose copies would
//! reclaim the most disk space.
//!
//! Two search implementations are provided and timed against each other:
//!
//! - [`duplicates::search`] - the reference algorithm: a naive O(n²) pairwise
//!   content comparison with no pre-filtering.
//! - [`duplicates::faster_search`] - the optimized algorithm: files whose size
//!   is unique among all scanned files are pruned before any content
//!   comparison is attempted.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use bytesize::ByteSize;

use crate::cli::{AlgorithmArg, Cli};
use crate::duplicates::{faster_search, search};
use crate::error::ExitCode;
use crate::scanner::{FsComparer, Walker};

/// Which search implementation a single pass should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPass {
    Reference,
    Optimized,
}

/// Run the application logic with parsed CLI arguments.
///
/// Enumerates the target directory, runs the selected search
/// implementation(s), and prints a report plus elapsed time for each.
///
/// # Errors
///
/// Returns an error if the scan path is missing or unreadable, or if any
/// file vanishes or becomes unreadable mid-comparison. The first such error
/// aborts the whole run; there are no retries and no partial results.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    log::debug!(
        "Scanning {} with algorithm {:?}",
        cli.path.display(),
        cli.algorithm
    );

    match cli.algorithm {
        AlgorithmArg::Reference => run_search(&cli.path, SearchPass::Reference)?,
        AlgorithmArg::Optimized => run_search(&cli.path, SearchPass::Optimized)?,
        AlgorithmArg::Both => {
            run_search(&cli.path, SearchPass::Reference)?;
            println!();
            println!(".. and now with the faster search implementation:");
            println!();
            run_search(&cli.path, SearchPass::Optimized)?;
        }
    }

    Ok(ExitCode::Success)
}

/// Run a single timed search pass over `path` and print its report.
///
/// The timer covers enumeration, search, and report rendering, so the two
/// passes of `--algorithm both` can be compared end to end.
fn run_search(path: &Path, pass: SearchPass) -> Result<()> {
    let t0 = Instant::now();

    let files = Walker::new(path)
        .walk()
        .with_context(|| format!("failed to scan {}", path.display()))?;

    let total_bytes: u64 = files.iter().map(|f| f.size).sum();
    log::info!(
        "Scanned {} files ({}) under {}",
        files.len(),
        ByteSize(total_bytes),
        path.display()
    );

    let comparer = FsComparer::new();
    let groups = match pass {
        SearchPass::Reference => {
            let (groups, stats) = search(&files, &comparer)?;
            log::info!(
                "Reference search: {} comparisons, {} duplicate groups",
                stats.comparisons,
                groups.len()
            );
            groups
        }
        SearchPass::Optimized => {
            let (groups, stats) = faster_search(&files, &comparer)?;
            log::info!(
                "Optimized search: {} files pruned by size, {} comparisons, {} groups",
                stats.pruned_unique_size,
                stats.comparisons,
                groups.len()
            );
            groups
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&groups, &mut out).context("failed to write report")?;
    writeln!(out, "Runtime: {:.2} seconds", t0.elapsed().as_secs_f64())
        .context("failed to write report")?;

    Ok(())
}
