//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Duplicate group management
//! - The reference O(n²) pairwise search
//! - The optimized size-prefiltered search

pub mod finder;
pub mod groups;

pub use finder::{faster_search, search, FinderError, SearchStats};
pub use groups::DuplicateGroup;
