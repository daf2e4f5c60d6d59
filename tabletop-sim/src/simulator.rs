//! Simulator implementation - reads command lines and drives the robot

use crate::output::OutputSink;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::BufRead;
use tabletop_robot::{Command, Error, Report, Result, Robot, Table};
use tracing::{debug, trace};

/// Configuration for the simulator
#[derive(Debug, Clone, Default)]
pub struct SimulatorConfig {
    /// Table the robot is placed on
    pub table: Table,
    /// Reject trailing text after MOVE/LEFT/RIGHT/REPORT/EXIT
    pub strict: bool,
    /// Record an [`ExecutionStep`] per line
    pub trace: bool,
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What happened to one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The robot accepted the command
    Applied,
    /// The robot refused it (unplaced, off the table, bad direction)
    Rejected,
    /// REPORT produced this output line
    Reported { output: String },
    /// The line did not parse; nothing happened
    Ignored { reason: String },
    /// EXIT stopped the loop
    Exit,
}

/// One entry of the execution trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// 1-based, counting only non-blank lines
    pub step: usize,
    pub line: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Result of [`Simulator::run`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Lines consumed from the input, blank ones included
    pub lines_read: usize,
    /// The loop stopped on EXIT rather than end of input
    pub exited: bool,
    /// Robot state after the last command
    pub report: Option<Report>,
}

/// The command loop - one robot, one sink
pub struct Simulator<S: OutputSink> {
    robot: Robot,
    sink: S,
    config: SimulatorConfig,
    trace: Vec<ExecutionStep>,
}

impl<S: OutputSink> Simulator<S> {
    /// Create a simulator with the default 5x5 table
    pub fn new(sink: S) -> Self {
        Self::with_config(SimulatorConfig::default(), sink)
    }

    /// Create a simulator with custom configuration
    pub fn with_config(config: SimulatorConfig, sink: S) -> Self {
        Self {
            robot: Robot::on_table(config.table),
            sink,
            config,
            trace: Vec::new(),
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Get the execution trace
    pub fn trace(&self) -> &[ExecutionStep] {
        &self.trace
    }

    /// Read lines until end of input or EXIT.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and end up as
    /// malformed commands. Only a failing reader or sink stops the run.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<Summary> {
        let mut lines_read = 0;
        let mut exited = false;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::from(e).with_operation("simulator::run"))?;
            if read == 0 {
                break;
            }
            lines_read += 1;

            let line = String::from_utf8_lossy(strip_newline(&buf));
            if let Cow::Owned(_) = line {
                debug!(line = lines_read, "invalid UTF-8 in input line");
            }
            if self.process_command(&line)? == Flow::Exit {
                exited = true;
                break;
            }
        }

        debug!(lines_read, exited, "command stream finished");
        Ok(Summary {
            lines_read,
            exited,
            report: self.robot.report(),
        })
    }

    /// Process one raw line.
    ///
    /// Blank, unknown and malformed lines are no-ops. The only error is a
    /// failing sink.
    pub fn process_command(&mut self, line: &str) -> Result<Flow> {
        let parsed = if self.config.strict {
            Command::parse_strict(line)
        } else {
            Command::parse(line)
        };

        match parsed {
            Ok(Some(command)) => self.dispatch(&command, line),
            Ok(None) => Ok(Flow::Continue),
            Err(err) if err.kind().is_protocol() => {
                debug!(line = line.trim(), error = %err, "ignoring line");
                self.record(
                    line,
                    Outcome::Ignored {
                        reason: err.kind().to_string(),
                    },
                );
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    /// Apply an already-parsed command
    pub fn execute(&mut self, command: &Command) -> Result<Flow> {
        self.dispatch(command, &command.to_string())
    }

    fn dispatch(&mut self, command: &Command, line: &str) -> Result<Flow> {
        let outcome = match command {
            Command::Place { x, y, facing } => outcome_of(self.robot.place(*x, *y, facing)),
            Command::Move => outcome_of(self.robot.move_forward()),
            Command::Left => outcome_of(self.robot.left()),
            Command::Right => outcome_of(self.robot.right()),
            Command::Report => match self.robot.report() {
                Some(report) => {
                    let output = report.to_string();
                    self.sink
                        .emit(&output)
                        .map_err(|e| e.with_operation("simulator::report"))?;
                    Outcome::Reported { output }
                }
                None => Outcome::Rejected,
            },
            Command::Exit => Outcome::Exit,
        };

        if outcome == Outcome::Rejected {
            debug!(%command, "robot refused command");
        } else {
            trace!(%command, ?outcome, "command processed");
        }

        let flow = if outcome == Outcome::Exit {
            Flow::Exit
        } else {
            Flow::Continue
        };
        self.record(line, outcome);
        Ok(flow)
    }

    fn record(&mut self, line: &str, outcome: Outcome) {
        if !self.config.trace {
            return;
        }
        self.trace.push(ExecutionStep {
            step: self.trace.len() + 1,
            line: line.trim().to_string(),
            outcome,
        });
    }
}

/// Drop a trailing `\n` or `\r\n`
fn strip_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn outcome_of(accepted: bool) -> Outcome {
    if accepted {
        Outcome::Applied
    } else {
        Outcome::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use tabletop_robot::{Direction, ErrorKind};

    fn simulator() -> Simulator<MemorySink> {
        Simulator::new(MemorySink::new())
    }

    fn traced() -> Simulator<MemorySink> {
        let config = SimulatorConfig {
            trace: true,
            ..Default::default()
        };
        Simulator::with_config(config, MemorySink::new())
    }

    fn output_of(input: &str) -> String {
        let mut sim = simulator();
        sim.run(input.as_bytes()).unwrap();
        sim.sink().contents()
    }

    #[test]
    fn test_place_command() {
        let mut sim = simulator();
        sim.process_command("PLACE 0,0,NORTH").unwrap();
        assert_eq!(sim.robot().facing(), Some(Direction::North));
        assert!(sim.robot().is_placed());
    }

    #[test]
    fn test_place_lowercase_direction() {
        let mut sim = simulator();
        sim.process_command("PLACE 1,2,east").unwrap();
        let report = sim.robot().report().unwrap();
        assert_eq!((report.x, report.y, report.facing), (1, 2, Direction::East));
    }

    #[test]
    fn test_malformed_place_is_ignored() {
        for line in [
            "PLACE 1,NORTH",
            "PLACE 1,2,INVALID_DIRECTION",
            "PLACE",
            "PLACE A,B,NORTH",
            "PLACE 1,B,NORTH",
            "PLACE A,2,NORTH",
        ] {
            let mut sim = simulator();
            assert_eq!(sim.process_command(line).unwrap(), Flow::Continue);
            assert!(!sim.robot().is_placed(), "{}", line);
            assert!(sim.sink().lines().is_empty());
        }
    }

    #[test]
    fn test_unknown_command_changes_nothing() {
        let mut sim = simulator();
        sim.process_command("PLACE 0,0,NORTH").unwrap();
        let before = sim.robot().report();

        sim.process_command("JUMP").unwrap();
        sim.process_command("INVALID COMMAND").unwrap();
        sim.process_command("").unwrap();

        assert_eq!(sim.robot().report(), before);
        assert!(sim.sink().lines().is_empty());
    }

    #[test]
    fn test_report_only_when_placed() {
        assert_eq!(output_of("REPORT\n"), "");
        assert_eq!(output_of("PLACE 1,2,SOUTH\nREPORT\n"), "1,2,SOUTH\n");
        assert_eq!(output_of("place 0,0,north\nreport\n"), "0,0,NORTH\n");
    }

    #[test]
    fn test_exit_stops_loop() {
        let mut sim = simulator();
        let summary = sim
            .run("PLACE 0,0,NORTH\nEXIT\nMOVE\nREPORT\n".as_bytes())
            .unwrap();
        assert!(summary.exited);
        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.report.unwrap().to_string(), "0,0,NORTH");
        assert!(sim.sink().lines().is_empty());
    }

    #[test]
    fn test_end_of_input_summary() {
        let mut sim = simulator();
        let summary = sim.run("\nPLACE 2,2,WEST\n\nMOVE\n".as_bytes()).unwrap();
        assert!(!summary.exited);
        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.report.unwrap().to_string(), "1,2,WEST");
    }

    #[test]
    fn test_trace_records_outcomes() {
        let mut sim = traced();
        sim.run("MOVE\nPLACE 0,4,NORTH\nMOVE\nJUMP\n\nREPORT\n".as_bytes())
            .unwrap();

        let outcomes: Vec<_> = sim.trace().iter().map(|s| s.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Rejected,
                Outcome::Applied,
                Outcome::Rejected,
                Outcome::Ignored {
                    reason: "UnknownCommand".to_string()
                },
                Outcome::Reported {
                    output: "0,4,NORTH".to_string()
                },
            ]
        );
        assert_eq!(sim.trace()[4].step, 5);
        assert_eq!(sim.trace()[4].line, "REPORT");
    }

    #[test]
    fn test_trace_serializes_flat() {
        let mut sim = traced();
        sim.process_command("report").unwrap();
        let json = serde_json::to_value(&sim.trace()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"step": 1, "line": "report", "outcome": "rejected"})
        );
    }

    #[test]
    fn test_strict_mode() {
        let config = SimulatorConfig {
            strict: true,
            ..Default::default()
        };
        let mut sim = Simulator::with_config(config, MemorySink::new());
        sim.run("PLACE 0,0,NORTH\nMOVE 2\nREPORT\n".as_bytes()).unwrap();
        assert_eq!(sim.sink().contents(), "0,0,NORTH\n");

        let mut sim = simulator();
        sim.run("PLACE 0,0,NORTH\nMOVE 2\nREPORT\n".as_bytes()).unwrap();
        assert_eq!(sim.sink().contents(), "0,1,NORTH\n");
    }

    #[test]
    fn test_custom_table() {
        let config = SimulatorConfig {
            table: Table::new(10, 2).unwrap(),
            ..Default::default()
        };
        let mut sim = Simulator::with_config(config, MemorySink::new());
        sim.run("PLACE 9,0,NORTH\nMOVE\nMOVE\nREPORT\n".as_bytes()).unwrap();
        assert_eq!(sim.sink().contents(), "9,1,NORTH\n");
    }

    #[test]
    fn test_execute_parsed_command() {
        let mut sim = traced();
        sim.execute(&Command::Place {
            x: 3,
            y: 3,
            facing: "EAST".to_string(),
        })
        .unwrap();
        assert_eq!(sim.execute(&Command::Exit).unwrap(), Flow::Exit);
        assert_eq!(sim.trace()[0].line, "PLACE 3,3,EAST");
    }

    #[test]
    fn test_trace_off_by_default() {
        let mut sim = simulator();
        sim.run("PLACE 0,0,NORTH\n".repeat(1000).as_bytes()).unwrap();
        sim.run("MOVE\nJUMP\nREPORT\n".as_bytes()).unwrap();
        assert!(sim.trace().is_empty());
        assert_eq!(sim.sink().contents(), "0,1,NORTH\n");
    }

    #[test]
    fn test_invalid_utf8_line_is_ignored() {
        let mut sim = traced();
        let input: &[u8] = b"PLACE 0,0,NORTH\n\xff\xfe\nMOVE\nREPORT\n";
        let summary = sim.run(input).unwrap();
        assert_eq!(summary.lines_read, 4);
        assert_eq!(sim.sink().contents(), "0,1,NORTH\n");
        assert_eq!(
            sim.trace()[1].outcome,
            Outcome::Ignored {
                reason: "UnknownCommand".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_utf8_inside_place() {
        let input: &[u8] = b"PLACE 1,1,NORTH\nPLACE 2,\xff,EAST\nREPORT\n";
        let mut sim = simulator();
        sim.run(input).unwrap();
        assert_eq!(sim.sink().contents(), "1,1,NORTH\n");
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        assert_eq!(output_of("PLACE 0,0,EAST\r\nMOVE\r\nREPORT"), "1,0,EAST\n");
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let mut sim = simulator();
        let err = sim.run(std::io::BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailed);
        assert_eq!(err.operation(), "simulator::run");
    }
}
