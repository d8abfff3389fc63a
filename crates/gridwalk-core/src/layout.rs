//! Text layouts: build a [`Grid`] from ASCII art and dump it back.
//!
//! ```text
//! S..
//! .#.
//! ..F
//! ```
//!
//! Each line is one row. Leading and trailing whitespace of the whole text
//! is trimmed, individual lines are kept as-is and must all have the same
//! width.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

pub const START: char = 'S';
pub const FINISH: char = 'F';
pub const WALL: char = '#';
pub const FLOOR: char = '.';

impl Grid {
    /// Parse a layout using the [`START`], [`FINISH`], [`WALL`] and
    /// [`FLOOR`] characters.
    ///
    /// The layout must contain exactly one start and one finish.
    pub fn from_layout(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(GridError::InconsistentSize(s.to_string()));
        }

        let mut grid = Grid::new(lines.len() as i32, width as i32)?;
        let mut finish = None;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Point::new(row as i32, col as i32);
                match ch {
                    FLOOR => {}
                    WALL => grid.place_wall(p),
                    START => {
                        if grid.start().is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                        grid.place_start(p);
                    }
                    FINISH => {
                        if finish.is_some() {
                            return Err(GridError::DuplicateFinish(p));
                        }
                        finish = Some(p);
                    }
                    _ => return Err(GridError::InvalidRune { ch, pos: p }),
                }
            }
        }

        if grid.start().is_none() {
            return Err(GridError::MissingStart);
        }
        let finish = finish.ok_or(GridError::MissingFinish)?;
        grid.set_finish(finish)?;
        Ok(grid)
    }

    /// Render the grid in the layout format accepted by
    /// [`from_layout`](Self::from_layout).
    ///
    /// A node that is both start and finish is written as [`START`].
    pub fn to_layout(&self) -> String {
        let cols = self.cols() as usize;
        let mut out = String::with_capacity(self.len() + self.rows() as usize);
        for (i, node) in self.iter().enumerate() {
            if i > 0 && i % cols == 0 {
                out.push('\n');
            }
            out.push(if node.is_start() {
                START
            } else if node.is_finish() {
                FINISH
            } else if node.is_wall() {
                WALL
            } else {
                FLOOR
            });
        }
        out
    }
}
