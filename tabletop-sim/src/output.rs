//! Output sinks - where REPORT lines go
//!
//! The simulator never touches a process-wide stream; it is handed a sink.

use std::io::{self, Write};
use tabletop_robot::{Error, Result};

/// Receives finished output lines (without trailing newline)
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}

/// Writes each line plus `\n` to an `io::Write` and flushes
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| {
                Error::output_failed(format!("failed to write output: {}", e))
                    .with_operation("output::emit")
                    .set_source(e)
            })
    }
}

/// Collects lines in memory (tests, embedding)
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything emitted so far, one `\n`-terminated line each
    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
