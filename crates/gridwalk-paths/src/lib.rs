//! Shortest-path traversal over obstacle grids.
//!
//! Two interchangeable strategies share the [`Traversal`] contract:
//!
//! - **Breadth-first search** ([`Bfs`]) driven by a FIFO [`LinkedQueue`]
//! - **Uniform-cost search** ([`Dijkstra`]) driven by a binary [`MinHeap`]
//!
//! Both finalize nodes one at a time, return them in visitation order, and
//! leave predecessor links in the grid for [`reconstruct_path`]. The
//! [`find_path`] helper bundles reset, search, and reconstruction into a
//! [`SearchResult`] that says whether the finish was reached.
//!
//! ```
//! use gridwalk_core::Grid;
//! use gridwalk_paths::{Algorithm, find_path};
//!
//! let mut grid = Grid::from_layout("S..\n.#.\n..F").unwrap();
//! let result = find_path(&mut grid, Algorithm::Bfs).unwrap();
//! assert_eq!(result.path_len(), Some(4));
//! ```

mod bfs;
mod dijkstra;
mod error;
mod heap;
mod path;
mod queue;
mod search;
mod traits;

pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
pub use error::SearchError;
pub use heap::{Entry, MinHeap};
pub use path::{is_valid_path, reconstruct_path};
pub use queue::LinkedQueue;
pub use search::{Algorithm, SearchResult, SearchStats, find_path};
pub use traits::Traversal;
