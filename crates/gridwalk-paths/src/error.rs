//! Errors reported by traversals.

use std::fmt;

use gridwalk_core::{GridError, Point};

/// Errors that prevent a search from running.
///
/// An unreachable finish is not an error; see
/// [`SearchResult::is_found`](crate::SearchResult::is_found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid itself is malformed (for example, it has no start node).
    Grid(GridError),
    /// A search endpoint lies outside the grid.
    OutOfBounds(Point),
    /// An algorithm name that [`Algorithm`](crate::Algorithm) does not know.
    UnknownAlgorithm(String),
    /// A uniform edge cost that is not strictly positive.
    InvalidStepCost(i32),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::OutOfBounds(p) => write!(f, "search: endpoint {p} is out of bounds"),
            Self::UnknownAlgorithm(name) => {
                write!(f, "search: unknown algorithm \u{201c}{name}\u{201d}")
            }
            Self::InvalidStepCost(c) => write!(f, "search: step cost {c} must be positive"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
