//! # tabletop-error
//!
//! Unified error handling for the tabletop robot workspace.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what went wrong (e.g., UnknownCommand, ConfigInvalid)
//! - **Error Context**: Key-value pairs that locate the cause
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! The robot state machine itself never returns these errors. It answers with
//! `bool` / `Option`. Errors live at the edges: parsing command lines,
//! configuring the table, and moving bytes in and out of the process.
//!
//! ## Usage
//!
//! ```rust
//! use tabletop_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidArgument, "PLACE expects X,Y,F")
//!         .with_operation("command::parse")
//!         .with_context("line", "PLACE 1,NORTH"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible functions return `Result<T, tabletop_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using tabletop Error
pub type Result<T> = std::result::Result<T, Error>;
