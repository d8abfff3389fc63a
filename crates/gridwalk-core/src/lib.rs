//! **gridwalk-core** — obstacle grid model for shortest-path traversal.
//!
//! This crate provides the types shared by the traversal algorithms in
//! `gridwalk-paths`: geometry primitives, the node [`Grid`] with its editing
//! operations, grid configuration, and ASCII layouts.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range, manhattan};
pub use grid::{Grid, Neighbors, Node, UNREACHABLE};
