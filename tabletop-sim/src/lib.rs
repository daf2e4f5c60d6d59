//! # Tabletop Sim
//!
//! The command loop around the robot:
//! 1. Read a line from any `BufRead`
//! 2. Parse it into a [`Command`](tabletop_robot::Command)
//! 3. Apply it to the [`Robot`](tabletop_robot::Robot)
//! 4. Send REPORT output to an [`OutputSink`]
//! 5. Repeat until end of input or EXIT
//!
//! Malformed and unknown lines are skipped without output.

mod output;
mod simulator;

pub use output::{MemorySink, OutputSink, WriterSink};
pub use simulator::{ExecutionStep, Flow, Outcome, Simulator, SimulatorConfig, Summary};
