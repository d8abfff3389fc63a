//! Grid construction parameters.

use crate::geom::Point;

/// Dimensions and endpoint placement for a new [`Grid`](crate::Grid).
///
/// The default is a 20×50 board with the start at (1, 1) and the finish at
/// (10, 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub finish: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Point::new(1, 1),
            finish: Point::new(10, 10),
        }
    }
}
