//! The [`Grid`] type — a dense 2D array of [`Node`]s.
//!
//! The grid is the sole owner of its nodes. Everything else (search queues,
//! predecessor links, visited sequences) refers to nodes by [`Point`], and all
//! mutation goes through the grid.

use std::ops::Deref;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Sentinel distance for nodes that no search has reached.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One cell of the grid.
///
/// Position and endpoint/wall flags are fixed from the node's point of view;
/// they change only through [`Grid`] editing methods, which keep the
/// one-start/one-finish invariant. Search state (distance, visited flag,
/// predecessor) is written by traversal algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    is_start: bool,
    is_finish: bool,
    is_wall: bool,
    is_visited: bool,
    distance: i32,
    previous: Option<Point>,
}

impl Node {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_finish: false,
            is_wall: false,
            is_visited: false,
            distance: UNREACHABLE,
            previous: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }

    /// Tentative cost from the start, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Predecessor on the best-known path, if any.
    #[inline]
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Mark the node as finalized. Only [`Grid::reset`] clears this.
    #[inline]
    pub fn mark_visited(&mut self) {
        self.is_visited = true;
    }

    #[inline]
    pub fn set_distance(&mut self, distance: i32) {
        self.distance = distance;
    }

    #[inline]
    pub fn set_previous(&mut self, previous: Point) {
        self.previous = Some(previous);
    }

    fn clear_search_state(&mut self) {
        self.is_visited = false;
        self.distance = UNREACHABLE;
        self.previous = None;
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Up to four neighbour positions, stored inline.
///
/// Dereferences to a slice in up, down, left, right order.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    buf: [Point; 4],
    len: usize,
}

impl Neighbors {
    fn push(&mut self, p: Point) {
        self.buf[self.len] = p;
        self.len += 1;
    }
}

impl Deref for Neighbors {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.buf[..self.len]
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Node`]s addressed by `(row, col)`.
///
/// Nodes are stored row-major. Dimensions are fixed for the lifetime of the
/// grid; build a new one to change them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    nodes: Vec<Node>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

impl Grid {
    /// Create a grid of fresh nodes with no walls and no endpoints.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Range::new(0, 0, rows, cols);
        Ok(Self {
            nodes: bounds.iter().map(Node::new).collect(),
            bounds,
            start: None,
            finish: None,
        })
    }

    /// Create a grid from a [`GridConfig`], placing both endpoints.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        let mut grid = Self::new(config.rows, config.cols)?;
        grid.set_start(config.start)?;
        grid.place_finish(config.finish)?;
        Ok(grid)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols() as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.idx(p).map(|i| &mut self.nodes[i])
    }

    /// Row-major iterator over all nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The designated start position, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The designated finish position, if any.
    #[inline]
    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    /// Both endpoints, or an error naming the one that is missing.
    pub fn endpoints(&self) -> Result<(Point, Point), GridError> {
        let start = self.start.ok_or(GridError::MissingStart)?;
        let finish = self.finish.ok_or(GridError::MissingFinish)?;
        Ok((start, finish))
    }

    /// In-bounds, unvisited neighbours of `p` in up, down, left, right order.
    ///
    /// Walls are included; traversals discard them when they are dequeued.
    pub fn neighbors(&self, p: Point) -> Neighbors {
        let mut out = Neighbors {
            buf: [Point::ZERO; 4],
            len: 0,
        };
        for n in p.neighbors_4() {
            if self.node(n).is_some_and(|node| !node.is_visited) {
                out.push(n);
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Move the start designation to `p`.
    ///
    /// Fails if `p` is out of bounds, a wall, or the finish node.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.check_free(p, self.finish)?;
        if let Some(old) = self.start.take() {
            let oi = self.index_of(old);
            self.nodes[oi].is_start = false;
        }
        let i = self.index_of(p);
        self.nodes[i].is_start = true;
        self.start = Some(p);
        Ok(())
    }

    /// Move the finish designation to `p`.
    ///
    /// Fails if `p` is out of bounds, a wall, or the start node.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GridError> {
        self.check_free(p, self.start)?;
        self.place_finish(p)
    }

    /// Toggle the wall flag at `p`. Returns the new flag.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let is_wall = self.node(p).ok_or(GridError::OutOfBounds(p))?.is_wall;
        self.set_wall(p, !is_wall)?;
        Ok(!is_wall)
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Endpoints can never become walls.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let Some(i) = self.idx(p) else {
            log::debug!("wall edit rejected: {p} out of bounds");
            return Err(GridError::OutOfBounds(p));
        };
        let node = &mut self.nodes[i];
        if node.is_start || node.is_finish {
            log::debug!("wall edit rejected: {p} is an endpoint");
            return Err(GridError::Occupied(p));
        }
        node.is_wall = wall;
        Ok(())
    }

    /// Positions of all walls, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().filter(|n| n.is_wall).map(|n| n.pos)
    }

    pub fn wall_count(&self) -> usize {
        self.walls().count()
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut() {
            node.is_wall = false;
        }
    }

    /// Rebuild the search state of every node: distance back to
    /// [`UNREACHABLE`], unvisited, no predecessor. Walls and endpoints stay.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear_search_state();
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Index of a point already known to be in bounds.
    #[inline]
    fn index_of(&self, p: Point) -> usize {
        p.row as usize * self.cols() as usize + p.col as usize
    }

    fn check_free(&self, p: Point, other_endpoint: Option<Point>) -> Result<(), GridError> {
        let Some(node) = self.node(p) else {
            log::debug!("endpoint edit rejected: {p} out of bounds");
            return Err(GridError::OutOfBounds(p));
        };
        if node.is_wall || other_endpoint == Some(p) {
            log::debug!("endpoint edit rejected: {p} is occupied");
            return Err(GridError::Occupied(p));
        }
        Ok(())
    }

    /// Place the finish without the start-overlap check. A grid built from
    /// a config may share one cell between both endpoints.
    fn place_finish(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if self.nodes[i].is_wall {
            return Err(GridError::Occupied(p));
        }
        if let Some(old) = self.finish.take() {
            let oi = self.index_of(old);
            self.nodes[oi].is_finish = false;
        }
        self.nodes[i].is_finish = true;
        self.finish = Some(p);
        Ok(())
    }

    /// Raw start placement used by the layout parser, which has already
    /// validated the position.
    pub(crate) fn place_start(&mut self, p: Point) {
        let i = self.index_of(p);
        self.nodes[i].is_start = true;
        self.start = Some(p);
    }

    pub(crate) fn place_wall(&mut self, p: Point) {
        let i = self.index_of(p);
        self.nodes[i].is_wall = true;
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Unchecked serialized form of a [`Grid`]. Converting it back runs the
/// checks that the constructors guarantee.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    nodes: Vec<Node>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            nodes,
            bounds,
            start,
            finish,
        } = repr;
        if bounds.min != Point::ZERO {
            return Err(GridError::Malformed(format!(
                "bounds {bounds} do not start at the origin"
            )));
        }
        let mut grid = Grid::new(bounds.rows(), bounds.cols())?;
        if nodes.len() != grid.len() {
            return Err(GridError::Malformed(format!(
                "{} nodes for bounds {bounds}",
                nodes.len()
            )));
        }
        for (i, node) in nodes.iter().enumerate() {
            let expected = grid.point(i);
            if node.pos != expected {
                return Err(GridError::Malformed(format!(
                    "node {i} is at {}, expected {expected}",
                    node.pos
                )));
            }
            if node.is_wall && (node.is_start || node.is_finish) {
                return Err(GridError::Occupied(node.pos));
            }
        }
        check_designation(&nodes, start, |n| n.is_start, "start")
            .map_err(|dup| dup.map_or_else(|| mismatch("start"), GridError::DuplicateStart))?;
        check_designation(&nodes, finish, |n| n.is_finish, "finish")
            .map_err(|dup| dup.map_or_else(|| mismatch("finish"), GridError::DuplicateFinish))?;

        grid.nodes = nodes;
        grid.start = start;
        grid.finish = finish;
        Ok(grid)
    }
}

/// Check that exactly the node at `field` carries the flag. On failure
/// returns the second flagged node if the flag is duplicated.
#[cfg(feature = "serde")]
fn check_designation(
    nodes: &[Node],
    field: Option<Point>,
    flag: impl Fn(&Node) -> bool,
    what: &str,
) -> Result<(), Option<Point>> {
    let mut flagged = nodes.iter().filter(|n| flag(*n)).map(|n| n.pos);
    let first = flagged.next();
    if let Some(second) = flagged.next() {
        log::debug!("grid data rejected: second {what} at {second}");
        return Err(Some(second));
    }
    if first != field {
        log::debug!("grid data rejected: {what} field does not match node flags");
        return Err(None);
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn mismatch(what: &str) -> GridError {
    GridError::Malformed(format!("{what} field does not match node flags"))
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_finish(Point::new(2, 2)).unwrap();
        g
    }

    #[test]
    fn new_grid_is_fresh() {
        let g = Grid::new(2, 3).unwrap();
        assert_eq!(g.len(), 6);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        for node in &g {
            assert!(!node.is_visited());
            assert!(!node.is_wall());
            assert_eq!(node.distance(), UNREACHABLE);
            assert_eq!(node.previous(), None);
        }
        assert_eq!(g.node(Point::new(1, 2)).unwrap().pos(), Point::new(1, 2));
    }

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(Grid::new(0, 5), Err(GridError::Empty));
        assert_eq!(Grid::new(5, 0), Err(GridError::Empty));
        assert_eq!(Grid::new(-1, 5), Err(GridError::Empty));
    }

    #[test]
    fn idx_point_round_trip() {
        let g = Grid::new(4, 7).unwrap();
        for (i, node) in g.iter().enumerate() {
            assert_eq!(g.idx(node.pos()), Some(i));
            assert_eq!(g.point(i), node.pos());
        }
        assert_eq!(g.idx(Point::new(4, 0)), None);
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::new(3, 3).unwrap();
        let center = g.neighbors(Point::new(1, 1));
        assert_eq!(
            &*center,
            &[
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
        let corner = g.neighbors(Point::new(0, 0));
        assert_eq!(&*corner, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbors_skip_visited() {
        let mut g = Grid::new(3, 3).unwrap();
        g.node_mut(Point::new(0, 1)).unwrap().mark_visited();
        let n = g.neighbors(Point::new(1, 1));
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&Point::new(0, 1)));
    }

    #[test]
    fn endpoints_required() {
        let mut g = Grid::new(2, 2).unwrap();
        assert_eq!(g.endpoints(), Err(GridError::MissingStart));
        g.set_start(Point::new(0, 0)).unwrap();
        assert_eq!(g.endpoints(), Err(GridError::MissingFinish));
        g.set_finish(Point::new(1, 1)).unwrap();
        assert_eq!(g.endpoints(), Ok((Point::new(0, 0), Point::new(1, 1))));
    }

    #[test]
    fn moving_start_keeps_exactly_one() {
        let mut g = grid_3x3();
        g.set_start(Point::new(1, 0)).unwrap();
        assert_eq!(g.iter().filter(|n| n.is_start()).count(), 1);
        assert!(g.node(Point::new(1, 0)).unwrap().is_start());
        assert!(!g.node(Point::new(0, 0)).unwrap().is_start());

        g.set_finish(Point::new(0, 2)).unwrap();
        assert_eq!(g.iter().filter(|n| n.is_finish()).count(), 1);
        assert_eq!(g.finish(), Some(Point::new(0, 2)));
    }

    #[test]
    fn endpoint_onto_wall_or_other_endpoint_rejected() {
        let mut g = grid_3x3();
        g.set_wall(Point::new(1, 1), true).unwrap();
        assert_eq!(g.set_start(Point::new(1, 1)), Err(GridError::Occupied(Point::new(1, 1))));
        assert_eq!(g.set_start(Point::new(2, 2)), Err(GridError::Occupied(Point::new(2, 2))));
        assert_eq!(g.set_finish(Point::new(0, 0)), Err(GridError::Occupied(Point::new(0, 0))));
        assert_eq!(
            g.set_finish(Point::new(3, 0)),
            Err(GridError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.finish(), Some(Point::new(2, 2)));
    }

    #[test]
    fn walls_never_overlap_endpoints() {
        let mut g = grid_3x3();
        assert_eq!(g.toggle_wall(Point::new(0, 0)), Err(GridError::Occupied(Point::new(0, 0))));
        assert_eq!(g.set_wall(Point::new(2, 2), true), Err(GridError::Occupied(Point::new(2, 2))));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = grid_3x3();
        let p = Point::new(1, 1);
        assert_eq!(g.toggle_wall(p), Ok(true));
        assert!(g.node(p).unwrap().is_wall());
        assert_eq!(g.walls().collect::<Vec<_>>(), vec![p]);
        assert_eq!(g.toggle_wall(p), Ok(false));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn clear_walls_removes_all() {
        let mut g = grid_3x3();
        g.set_wall(Point::new(0, 1), true).unwrap();
        g.set_wall(Point::new(1, 1), true).unwrap();
        g.clear_walls();
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn reset_clears_search_state_only() {
        let mut g = grid_3x3();
        g.set_wall(Point::new(1, 1), true).unwrap();
        {
            let n = g.node_mut(Point::new(0, 1)).unwrap();
            n.mark_visited();
            n.set_distance(1);
            n.set_previous(Point::new(0, 0));
        }
        g.reset();
        let n = g.node(Point::new(0, 1)).unwrap();
        assert!(!n.is_visited());
        assert_eq!(n.distance(), UNREACHABLE);
        assert_eq!(n.previous(), None);
        assert!(g.node(Point::new(1, 1)).unwrap().is_wall());
        assert_eq!(g.endpoints(), Ok((Point::new(0, 0), Point::new(2, 2))));
    }

    #[test]
    fn from_config_default_board() {
        let g = Grid::from_config(&GridConfig::default()).unwrap();
        assert_eq!(g.rows(), 20);
        assert_eq!(g.cols(), 50);
        assert_eq!(g.endpoints(), Ok((Point::new(1, 1), Point::new(10, 10))));
    }

    #[test]
    fn from_config_single_cell_shares_endpoint() {
        let config = GridConfig {
            rows: 1,
            cols: 1,
            start: Point::ZERO,
            finish: Point::ZERO,
        };
        let g = Grid::from_config(&config).unwrap();
        let n = g.node(Point::ZERO).unwrap();
        assert!(n.is_start() && n.is_finish());
    }

    #[test]
    fn from_config_rejects_out_of_bounds_endpoint() {
        let config = GridConfig {
            rows: 2,
            cols: 2,
            start: Point::ZERO,
            finish: Point::new(5, 5),
        };
        assert_eq!(
            Grid::from_config(&config),
            Err(GridError::OutOfBounds(Point::new(5, 5)))
        );
    }
}
