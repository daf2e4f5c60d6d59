//! # Commands
//!
//! One line of the text protocol, parsed.
//!
//! ```text
//! PLACE X,Y,F
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! EXIT
//! ```
//!
//! Keywords are case-insensitive. PLACE fields are comma-separated and
//! trimmed; X and Y are signed base-10 integers and F is upcased but not
//! checked here, since deciding whether F is a direction is the robot's call.

use crate::error::{self, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed protocol command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Put the robot at (x, y) facing `facing` (upcased, unvalidated)
    Place { x: i32, y: i32, facing: String },
    /// Advance one unit
    Move,
    /// Rotate counter-clockwise
    Left,
    /// Rotate clockwise
    Right,
    /// Print position and facing
    Report,
    /// Stop the command loop
    Exit,
}

impl Command {
    /// Parse one line, ignoring trailing text after bare keywords.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        parse_line(line, false)
    }

    /// Like [`Command::parse`], but `MOVE 3` and friends are rejected
    pub fn parse_strict(line: &str) -> Result<Option<Command>> {
        parse_line(line, true)
    }

    /// Canonical upper-case keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
            Command::Exit => "EXIT",
        }
    }
}

/// Only ASCII whitespace separates tokens; anything else is part of a token.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_separator)
}

fn parse_line(line: &str, strict: bool) -> Result<Option<Command>> {
    let line = trim(line);
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, args) = match line.split_once(is_separator) {
        Some((keyword, rest)) => (keyword, Some(trim(rest)).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let command = match keyword.to_uppercase().as_str() {
        "PLACE" => parse_place(args)?,
        "MOVE" => bare(Command::Move, args, strict)?,
        "LEFT" => bare(Command::Left, args, strict)?,
        "RIGHT" => bare(Command::Right, args, strict)?,
        "REPORT" => bare(Command::Report, args, strict)?,
        "EXIT" => bare(Command::Exit, args, strict)?,
        _ => return Err(Error::unknown_command(keyword)),
    };
    Ok(Some(command))
}

fn bare(command: Command, args: Option<&str>, strict: bool) -> Result<Command> {
    match args {
        Some(args) if strict => Err(error::unexpected_args(command.keyword(), args)),
        _ => Ok(command),
    }
}

fn parse_place(args: Option<&str>) -> Result<Command> {
    let args = args.ok_or_else(error::missing_place_args)?;
    let fields: Vec<&str> = args.split(',').map(trim).collect();
    let [x, y, facing] = fields.as_slice() else {
        return Err(error::place_field_count(fields.len()));
    };

    let x = x
        .parse::<i32>()
        .map_err(|_| error::coordinate_not_integer("x", *x))?;
    let y = y
        .parse::<i32>()
        .map_err(|_| error::coordinate_not_integer("y", *y))?;

    Ok(Command::Place {
        x,
        y,
        facing: facing.to_uppercase(),
    })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, facing } => write!(f, "PLACE {},{},{}", x, y, facing),
            other => f.write_str(other.keyword()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn place(x: i32, y: i32, facing: &str) -> Option<Command> {
        Some(Command::Place {
            x,
            y,
            facing: facing.to_string(),
        })
    }

    fn kind_of(line: &str) -> ErrorKind {
        Command::parse(line).unwrap_err().kind()
    }

    #[test]
    fn test_parse_place() {
        assert_eq!(Command::parse("PLACE 0,0,NORTH").unwrap(), place(0, 0, "NORTH"));
        assert_eq!(Command::parse("PLACE 1,2,east").unwrap(), place(1, 2, "EAST"));
        assert_eq!(Command::parse("   PLACE 0,0,NORTH   ").unwrap(), place(0, 0, "NORTH"));
        assert_eq!(Command::parse("PlAcE 0,0,NoRtH").unwrap(), place(0, 0, "NORTH"));
        assert_eq!(Command::parse("PLACE  3 , 4 , west").unwrap(), place(3, 4, "WEST"));
        assert_eq!(Command::parse("PLACE -1,+2,SOUTH").unwrap(), place(-1, 2, "SOUTH"));
    }

    #[test]
    fn test_place_keeps_unknown_direction() {
        assert_eq!(
            Command::parse("PLACE 1,2,INVALID_DIRECTION").unwrap(),
            place(1, 2, "INVALID_DIRECTION")
        );
    }

    #[test]
    fn test_malformed_place() {
        assert_eq!(kind_of("PLACE"), ErrorKind::InvalidArgument);
        assert_eq!(kind_of("PLACE 1,NORTH"), ErrorKind::InvalidArgument);
        assert_eq!(kind_of("PLACE 1,2,3,NORTH"), ErrorKind::InvalidArgument);
        assert_eq!(kind_of("PLACE A,B,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE 1,B,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE A,2,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE 1.5,2,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE ,2,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE 2147483648,0,NORTH"), ErrorKind::ParseFailed);
        assert_eq!(kind_of("PLACE 0,-2147483649,NORTH"), ErrorKind::ParseFailed);
    }

    #[test]
    fn test_parse_bare_keywords() {
        assert_eq!(Command::parse("MOVE").unwrap(), Some(Command::Move));
        assert_eq!(Command::parse("move").unwrap(), Some(Command::Move));
        assert_eq!(Command::parse("Left").unwrap(), Some(Command::Left));
        assert_eq!(Command::parse("right").unwrap(), Some(Command::Right));
        assert_eq!(Command::parse("report").unwrap(), Some(Command::Report));
        assert_eq!(Command::parse("EXIT").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
        assert_eq!(kind_of("JUMP"), ErrorKind::UnknownCommand);
        assert_eq!(kind_of("INVALID COMMAND"), ErrorKind::UnknownCommand);
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        assert_eq!(Command::parse("\tMOVE\r").unwrap(), Some(Command::Move));
        assert_eq!(Command::parse("MOVE\u{a0}").unwrap_err().kind(), ErrorKind::UnknownCommand);
        assert_eq!(kind_of("\u{3000}REPORT"), ErrorKind::UnknownCommand);
        assert_eq!(Command::parse("\u{a0}").unwrap_err().kind(), ErrorKind::UnknownCommand);
        assert_eq!(kind_of("PLACE\u{a0}0,0,NORTH"), ErrorKind::UnknownCommand);
    }

    #[test]
    fn test_trailing_args() {
        assert_eq!(Command::parse("MOVE 3").unwrap(), Some(Command::Move));
        assert_eq!(Command::parse("REPORT now please").unwrap(), Some(Command::Report));

        let err = Command::parse_strict("MOVE 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context()[0], ("args", "3".to_string()));
        assert_eq!(Command::parse_strict("MOVE").unwrap(), Some(Command::Move));
        assert_eq!(Command::parse_strict("PLACE 0,0,NORTH").unwrap(), place(0, 0, "NORTH"));
    }

    #[test]
    fn test_display_round_trips() {
        for line in ["PLACE 1,2,EAST", "MOVE", "LEFT", "RIGHT", "REPORT", "EXIT"] {
            let command = Command::parse(line).unwrap().unwrap();
            assert_eq!(command.to_string(), line);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(place(1, 2, "EAST").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"op": "PLACE", "x": 1, "y": 2, "facing": "EAST"}));
        let json = serde_json::to_value(Command::Report).unwrap();
        assert_eq!(json, serde_json::json!({"op": "REPORT"}));
    }
}
