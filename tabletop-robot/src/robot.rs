//! # Robot
//!
//! The robot state machine. Two states: `Unplaced` (initial) and `Placed`.
//! Only a successful PLACE leaves `Unplaced`, and nothing ever returns to it.
//!
//! Every operation returns `bool` (or `Option` for REPORT) instead of an
//! error. Validation happens first; state is replaced as a whole or not at all.

use crate::direction::Direction;
use crate::table::{Position, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement state of the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed { position: Position, facing: Direction },
}

/// Result of a REPORT on a placed robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}

/// A toy robot on a table
#[derive(Debug, Clone, Default)]
pub struct Robot {
    table: Table,
    state: RobotState,
}

impl Robot {
    /// Unplaced robot on the default 5x5 table
    pub fn new() -> Self {
        Self::default()
    }

    /// Unplaced robot on the given table
    pub fn on_table(table: Table) -> Self {
        Robot {
            table,
            state: RobotState::Unplaced,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    pub fn facing(&self) -> Option<Direction> {
        match self.state {
            RobotState::Placed { facing, .. } => Some(facing),
            RobotState::Unplaced => None,
        }
    }

    /// PLACE with a direction token, e.g. `"NORTH"`.
    ///
    /// The token must already be upper-case. Returns `false` and changes
    /// nothing if the token or the coordinates are invalid.
    pub fn place(&mut self, x: i32, y: i32, facing: &str) -> bool {
        match Direction::from_token(facing) {
            Some(facing) => self.place_facing(x, y, facing),
            None => false,
        }
    }

    /// PLACE with an already-typed direction
    pub fn place_facing(&mut self, x: i32, y: i32, facing: Direction) -> bool {
        if !self.table.is_valid_position(x, y) {
            return false;
        }
        self.state = RobotState::Placed {
            position: Position::new(x, y),
            facing,
        };
        true
    }

    /// MOVE one unit forward. Refused if unplaced or if it would leave the table.
    pub fn move_forward(&mut self) -> bool {
        let RobotState::Placed { position, facing } = self.state else {
            return false;
        };
        match position.offset(facing.delta()) {
            Some(next) if self.table.contains(next) => {
                self.state = RobotState::Placed {
                    position: next,
                    facing,
                };
                true
            }
            _ => false,
        }
    }

    /// LEFT: rotate 90° counter-clockwise in place
    pub fn left(&mut self) -> bool {
        self.turn(Direction::left)
    }

    /// RIGHT: rotate 90° clockwise in place
    pub fn right(&mut self) -> bool {
        self.turn(Direction::right)
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> bool {
        let RobotState::Placed { position, facing } = self.state else {
            return false;
        };
        self.state = RobotState::Placed {
            position,
            facing: rotate(facing),
        };
        true
    }

    /// REPORT: `None` until placed
    pub fn report(&self) -> Option<Report> {
        match self.state {
            RobotState::Placed { position, facing } => Some(Report {
                x: position.x,
                y: position.y,
                facing,
            }),
            RobotState::Unplaced => None,
        }
    }
}
