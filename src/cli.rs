//! Command-line interface definitions for dupescan.
//!
//! This module defines all CLI arguments using the clap derive API. The tool
//! is deliberately single-purpose: with no arguments it scans `./images`,
//! runs both search implementations back to back, and prints a timed report
//! for each.
//!
//! # Example
//!
//! ```bash
//! # Scan the default ./images directory with both algorithms
//! dupescan
//!
//! # Scan a different directory
//! dupescan ~/Pictures
//!
//! # Run only the optimized search
//! dupescan ~/Pictures --algorithm optimized
//!
//! # Verbose mode for debugging
//! dupescan -v ~/Pictures
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Duplicate file finder.
///
/// dupescan scans a directory tree for files with identical content and
/// reports the file with the most duplicates and the group of copies whose
/// deletion would reclaim the most disk space. Each search pass prints its
/// own report and elapsed wall-clock time.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicate files
    #[arg(value_name = "PATH", default_value = "images")]
    pub path: PathBuf,

    /// Which search implementation to run
    ///
    /// `both` runs the reference search followed by the optimized search so
    /// their runtimes can be compared.
    #[arg(short, long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmArg,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output (the report itself is still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Search implementation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Naive O(n²) pairwise content comparison
    Reference,
    /// Size-prefiltered comparison (unique-size files are never opened)
    Optimized,
    /// Run the reference search, then the optimized search
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dupescan"]);

        assert_eq!(cli.path, PathBuf::from("images"));
        assert_eq!(cli.algorithm, AlgorithmArg::Both);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_path_override() {
        let cli = Cli::parse_from(["dupescan", "/tmp/photos"]);
        assert_eq!(cli.path, PathBuf::from("/tmp/photos"));
    }

    #[test]
    fn test_cli_algorithm_selection() {
        let cli = Cli::parse_from(["dupescan", "--algorithm", "reference"]);
        assert_eq!(cli.algorithm, AlgorithmArg::Reference);

        let cli = Cli::parse_from(["dupescan", "-a", "optimized"]);
        assert_eq!(cli.algorithm, AlgorithmArg::Optimized);
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::parse_from(["dupescan", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dupescan", "-q", "-v"]);
        assert!(result.is_err());
    }
}
