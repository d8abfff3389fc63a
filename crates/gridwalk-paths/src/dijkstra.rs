use gridwalk_core::{Grid, Point};

use crate::error::SearchError;
use crate::heap::MinHeap;
use crate::traits::{Traversal, check_endpoints};

/// Uniform-cost search (Dijkstra).
///
/// Every edge costs [`step_cost`](Self::step_cost). With the default cost of
/// 1 the visitation order is breadth-first up to tie-breaking in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dijkstra {
    step_cost: i32,
}

impl Dijkstra {
    /// A search where every edge costs `step_cost`, which must be positive.
    pub fn with_step_cost(step_cost: i32) -> Result<Self, SearchError> {
        if step_cost <= 0 {
            return Err(SearchError::InvalidStepCost(step_cost));
        }
        Ok(Self { step_cost })
    }

    #[inline]
    pub fn step_cost(&self) -> i32 {
        self.step_cost
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self { step_cost: 1 }
    }
}

impl Traversal for Dijkstra {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, SearchError> {
        check_endpoints(grid, start, finish)?;

        let mut visited = Vec::new();
        let mut open: MinHeap<Point> = MinHeap::new();

        if let Some(node) = grid.node_mut(start) {
            node.set_distance(0);
        }
        open.enqueue(start, 0);

        while let Some(entry) = open.dequeue() {
            let current = entry.element;
            let Some(node) = grid.node_mut(current) else {
                continue;
            };
            // Stale entries surface here once the node is finalized.
            if node.is_visited() || node.is_wall() {
                continue;
            }
            node.mark_visited();
            let current_dist = node.distance();
            visited.push(current);
            log::trace!("dijkstra: visit {current} at {current_dist}");

            if current == finish {
                return Ok(visited);
            }

            let neighbors = grid.neighbors(current);
            for &np in neighbors.iter() {
                let Some(n) = grid.node_mut(np) else {
                    continue;
                };
                let tentative = current_dist.saturating_add(self.step_cost);
                if tentative >= n.distance() {
                    continue;
                }
                n.set_distance(tentative);
                n.set_previous(current);
                open.enqueue(np, tentative);
            }
        }

        Ok(visited)
    }
}
