//! # Table
//!
//! The bounded surface the robot moves on.

use crate::error::{self, Result};
use serde::{Deserialize, Serialize};

/// Default table width
pub const DEFAULT_WIDTH: i32 = 5;

/// Default table height
pub const DEFAULT_HEIGHT: i32 = 5;

/// A grid coordinate. May lie off the table; ask [`Table::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Offset by `(dx, dy)`, or `None` on integer overflow
    pub fn offset(self, (dx, dy): (i32, i32)) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// Rectangular table, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    width: i32,
    height: i32,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Table {
    /// Create a table; both dimensions must be positive
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(error::invalid_dimension("width", width));
        }
        if height <= 0 {
            return Err(error::invalid_dimension("height", height));
        }
        Ok(Table { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `0 <= x < width` and `0 <= y < height`
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.is_valid_position(position.x, position.y)
    }
}
