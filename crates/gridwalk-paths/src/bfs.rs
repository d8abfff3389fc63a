use gridwalk_core::{Grid, Point};

use crate::error::SearchError;
use crate::queue::LinkedQueue;
use crate::traits::{Traversal, check_endpoints};

/// Breadth-first search.
///
/// Every step costs 1, so visitation proceeds level by level and the
/// predecessor links describe a shortest path in edge count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl Traversal for Bfs {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, SearchError> {
        check_endpoints(grid, start, finish)?;

        let mut visited = Vec::new();
        let mut queue = LinkedQueue::new();

        if let Some(node) = grid.node_mut(start) {
            node.set_distance(0);
        }
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(node) = grid.node_mut(current) else {
                continue;
            };
            if node.is_visited() || node.is_wall() {
                continue;
            }
            node.mark_visited();
            let next_dist = node.distance().saturating_add(1);
            visited.push(current);
            log::trace!("bfs: visit {current}");

            if current == finish {
                return Ok(visited);
            }

            // A neighbour discovered twice before it is dequeued is queued
            // twice; the second pop is a no-op.
            let neighbors = grid.neighbors(current);
            for &np in neighbors.iter() {
                if let Some(n) = grid.node_mut(np) {
                    n.set_previous(current);
                    n.set_distance(next_dist);
                }
                queue.push_back(np);
            }
        }

        Ok(visited)
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::UNREACHABLE;

    use super::*;

    fn run(layout: &str) -> (Grid, Vec<Point>) {
        let mut grid = Grid::from_layout(layout).unwrap();
        let (start, finish) = grid.endpoints().unwrap();
        let visited = Bfs.search(&mut grid, start, finish).unwrap();
        (grid, visited)
    }

    #[test]
    fn level_order_on_open_grid() {
        let (grid, visited) = run("
S..
...
..F
");
        assert_eq!(
            visited,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(grid.node(Point::new(2, 2)).unwrap().distance(), 4);

        // (1, 1) is discovered from (1, 0) and again from (0, 1), so it sits
        // in the queue twice. The second discovery owns the link and the
        // second pop finalizes nothing.
        let center = grid.node(Point::new(1, 1)).unwrap();
        assert_eq!(center.previous(), Some(Point::new(0, 1)));
        assert_eq!(center.distance(), 2);
        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), visited.len());
    }

    #[test]
    fn stops_when_finish_is_dequeued() {
        let (grid, visited) = run("F.S..");
        assert_eq!(
            visited,
            vec![
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 3),
                Point::new(0, 0),
            ]
        );
        // Discovered but never dequeued.
        let beyond = grid.node(Point::new(0, 4)).unwrap();
        assert!(!beyond.is_visited());
        assert_eq!(beyond.previous(), Some(Point::new(0, 3)));
    }

    #[test]
    fn walls_are_never_visited() {
        let (grid, visited) = run("
S#.
.#.
..F
");
        assert!(!visited.contains(&Point::new(0, 1)));
        assert!(!visited.contains(&Point::new(1, 1)));
        assert!(!grid.node(Point::new(0, 1)).unwrap().is_visited());
        assert_eq!(visited.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn exhausts_when_finish_enclosed() {
        let (grid, visited) = run("
S.#.
..#F
");
        assert_eq!(visited.len(), 4);
        let finish = grid.node(Point::new(1, 3)).unwrap();
        assert!(!finish.is_visited());
        assert_eq!(finish.previous(), None);
        assert_eq!(finish.distance(), UNREACHABLE);
    }

    #[test]
    fn out_of_bounds_endpoint() {
        let mut grid = Grid::from_layout("S.F").unwrap();
        assert_eq!(
            Bfs.search(&mut grid, Point::new(0, 0), Point::new(1, 0)),
            Err(SearchError::OutOfBounds(Point::new(1, 0)))
        );
        assert!(grid.iter().all(|n| !n.is_visited()));
    }
}
