//! Path reconstruction from predecessor links.

use gridwalk_core::{Grid, Node, Point};

/// Walk predecessor links back from `finish` and return the chain in forward
/// order, ending at `finish`.
///
/// The chain stops at the first node without a predecessor. After a
/// successful search that node is the start; if the finish was never
/// reached the chain is usually just `[finish]`. Check the first element
/// against the start (or use [`find_path`](crate::find_path)) to tell the
/// two apart. Returns an empty chain if `finish` is outside the grid.
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Vec<Point> {
    let mut path = Vec::new();
    if !grid.contains(finish) {
        return path;
    }
    // A chain never repeats a node, so it cannot be longer than the grid.
    let chain = std::iter::successors(Some(finish), |&p| grid.node(p).and_then(Node::previous));
    path.extend(chain.take(grid.len()));
    path.reverse();
    path
}

/// Whether `path` runs from `start` to `finish` through orthogonally
/// adjacent, non-wall nodes.
pub fn is_valid_path(grid: &Grid, path: &[Point], start: Point, finish: Point) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&finish)
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
        && path.iter().all(|&p| grid.node(p).is_some_and(|n| !n.is_wall()))
}
