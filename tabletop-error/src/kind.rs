//! Error kinds for tabletop operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide whether a failure is a malformed
/// command (skip it), a bad configuration (refuse to start) or an I/O problem
/// (abort the run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration, e.g. a table with a zero dimension
    ConfigInvalid,

    // =========================================================================
    // Command protocol errors
    // =========================================================================
    /// The keyword is not part of the command protocol
    UnknownCommand,

    /// A token could not be parsed (e.g. a non-integer coordinate)
    ParseFailed,

    /// Wrong number or shape of arguments for a known command
    InvalidArgument,

    /// Not one of NORTH, EAST, SOUTH, WEST
    InvalidDirection,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Writing to the output sink failed
    OutputFailed,

    /// Serialization/deserialization failed
    SerializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",

            ErrorKind::UnknownCommand => "UnknownCommand",
            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::InvalidDirection => "InvalidDirection",

            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::OutputFailed => "OutputFailed",
            ErrorKind::SerializationFailed => "SerializationFailed",
        }
    }

    /// Whether this kind comes from a malformed command line.
    ///
    /// The command loop treats these as silent no-ops.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnknownCommand
                | ErrorKind::ParseFailed
                | ErrorKind::InvalidArgument
                | ErrorKind::InvalidDirection
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
