//! # Direction
//!
//! The four cardinal directions. Declaration order is the clockwise cycle
//! NORTH → EAST → SOUTH → WEST; rotation goes through an explicit table.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way the robot faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at NORTH
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Canonical protocol token
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    /// Exact, case-sensitive lookup of a canonical token
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "NORTH" => Some(Direction::North),
            "EAST" => Some(Direction::East),
            "SOUTH" => Some(Direction::South),
            "WEST" => Some(Direction::West),
            _ => None,
        }
    }

    /// Membership test against the canonical tokens. No normalization.
    pub fn is_valid(token: &str) -> bool {
        Self::from_token(token).is_some()
    }

    /// Quarter turn counter-clockwise
    pub fn left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Quarter turn clockwise
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit step `(dx, dy)` when moving forward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// Rotate a direction token left; `None` if the token is not a direction
pub fn rotate_left(token: &str) -> Option<Direction> {
    Direction::from_token(token).map(Direction::left)
}

/// Rotate a direction token right; `None` if the token is not a direction
pub fn rotate_right(token: &str) -> Option<Direction> {
    Direction::from_token(token).map(Direction::right)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_token(s).ok_or_else(|| Error::invalid_direction(s))
    }
}
