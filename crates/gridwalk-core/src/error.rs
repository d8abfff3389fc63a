//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when constructing, parsing, or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have zero rows or zero columns.
    Empty,
    /// Layout lines have inconsistent widths.
    InconsistentSize(String),
    /// A layout character outside the allowed set was found.
    InvalidRune { ch: char, pos: Point },
    /// The position lies outside the grid.
    OutOfBounds(Point),
    /// The position holds a wall or an endpoint and cannot take the edit.
    Occupied(Point),
    /// No node is designated as the start.
    MissingStart,
    /// No node is designated as the finish.
    MissingFinish,
    /// More than one node is designated as the start.
    DuplicateStart(Point),
    /// More than one node is designated as the finish.
    DuplicateFinish(Point),
    /// Serialized grid data whose nodes disagree with its bounds or endpoints.
    Malformed(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid: zero rows or columns"),
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "grid: {p} is out of bounds"),
            Self::Occupied(p) => write!(f, "grid: {p} is occupied"),
            Self::MissingStart => f.write_str("grid: no start node"),
            Self::MissingFinish => f.write_str("grid: no finish node"),
            Self::DuplicateStart(p) => write!(f, "grid: second start node at {p}"),
            Self::DuplicateFinish(p) => write!(f, "grid: second finish node at {p}"),
            Self::Malformed(s) => write!(f, "grid: malformed data: {s}"),
        }
    }
}

impl std::error::Error for GridError {}
