//! Algorithm selection and the one-call [`find_path`] entry point.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use gridwalk_core::{Grid, Point, UNREACHABLE};

use crate::bfs::Bfs;
use crate::dijkstra::Dijkstra;
use crate::error::SearchError;
use crate::path::reconstruct_path;
use crate::traits::Traversal;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The traversal strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl Traversal for Algorithm {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, SearchError> {
        match self {
            Self::Bfs => Bfs.search(grid, start, finish),
            Self::Dijkstra => Dijkstra::default().search(grid, start, finish),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Figures describing one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Final distance of the finish node, `None` if it was not reached.
    pub distance: Option<i32>,
    pub nodes_visited: usize,
    /// Wall-clock time spent searching and reconstructing.
    pub elapsed: Duration,
}

/// Output of [`find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub start: Point,
    pub finish: Point,
    /// Nodes in the order they were finalized.
    pub visited: Vec<Point>,
    /// Start-to-finish path, present only when the finish was reached.
    pub path: Option<Vec<Point>>,
    pub stats: SearchStats,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges on the path, if one was found.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Reset `grid`, search it from its start to its finish with `algorithm`,
/// and reconstruct the path.
///
/// Fails if the grid lacks a start or finish. An unreachable finish is
/// reported through [`SearchResult::is_found`], not as an error.
pub fn find_path(grid: &mut Grid, algorithm: Algorithm) -> Result<SearchResult, SearchError> {
    let (start, finish) = grid.endpoints()?;
    grid.reset();

    let began = Instant::now();
    let visited = algorithm.search(grid, start, finish)?;
    let chain = reconstruct_path(grid, finish);
    let elapsed = began.elapsed();

    let reached = grid.node(finish).is_some_and(|n| n.is_visited());
    let path = (reached && chain.first() == Some(&start)).then_some(chain);
    let distance = grid
        .node(finish)
        .map(|n| n.distance())
        .filter(|&d| reached && d != UNREACHABLE);

    log::debug!(
        "{algorithm}: {} nodes visited, {}",
        visited.len(),
        match distance {
            Some(d) => format!("finish reached at distance {d}"),
            None => "finish unreachable".to_string(),
        }
    );

    Ok(SearchResult {
        algorithm,
        start,
        finish,
        stats: SearchStats {
            distance,
            nodes_visited: visited.len(),
            elapsed,
        },
        visited,
        path,
    })
}
