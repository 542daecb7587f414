//! Error types for sorted maps.
//!
//! Looking up or deleting a missing key is not an error; those operations
//! return `Option`. The errors here cover construction and the internal
//! heap protection check.

use std::fmt;

/// Represents errors that can occur when building or draining a sorted map.
///
/// # Examples
///
/// ```rust
/// use heapmap::SortedMapError;
///
/// let error = SortedMapError::MissingComparator;
/// assert_eq!(format!("{error}"), "comparator is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedMapError {
    /// The container was built without a comparator.
    MissingComparator,
    /// A minimum was requested from an empty ordering index.
    EmptyIndex,
}

impl fmt::Display for SortedMapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComparator => formatter.write_str("comparator is required"),
            Self::EmptyIndex => formatter.write_str("ordering index is empty"),
        }
    }
}

impl std::error::Error for SortedMapError {}
