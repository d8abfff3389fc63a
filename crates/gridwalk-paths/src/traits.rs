use gridwalk_core::{Grid, Point};

use crate::error::SearchError;

/// A shortest-path traversal over a [`Grid`].
pub trait Traversal {
    /// Search from `start` until `finish` is finalized or the work-list runs
    /// dry. Returns every finalized node in the order it was visited.
    ///
    /// Mutates node search state (visited flag, distance, predecessor link)
    /// in place; reset the grid before searching it again. Walls and
    /// already-visited nodes are skipped when they come off the work-list.
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, SearchError>;
}

/// Reject endpoints outside the grid before any node is touched.
pub(crate) fn check_endpoints(
    grid: &Grid,
    start: Point,
    finish: Point,
) -> Result<(), SearchError> {
    for p in [start, finish] {
        if !grid.contains(p) {
            return Err(SearchError::OutOfBounds(p));
        }
    }
    Ok(())
}
