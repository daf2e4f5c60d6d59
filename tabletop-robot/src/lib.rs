//! # Tabletop Robot
//!
//! A toy robot on a bounded rectangular table.
//!
//! ## Core Concepts
//! - **Table**: the grid the robot may occupy, (0,0) inclusive to (width, height) exclusive
//! - **Direction**: NORTH, EAST, SOUTH, WEST with an explicit rotation table
//! - **Robot**: `Unplaced` until a valid PLACE, then `Placed { position, facing }`
//! - **Command**: one parsed line of the text protocol
//!
//! Every robot operation validates before it mutates. A rejected operation
//! leaves the robot exactly as it was.

pub mod command;
pub mod direction;
pub mod error;
pub mod robot;
pub mod table;

pub use command::Command;
pub use direction::{rotate_left, rotate_right, Direction};
pub use error::{Error, ErrorKind, Result};
pub use robot::{Report, Robot, RobotState};
pub use table::{Position, Table, DEFAULT_HEIGHT, DEFAULT_WIDTH};
