//! # Tabletop CLI
//!
//! Command-line interface for the toy robot simulator.
//!
//! Usage:
//!   tabletop [FILE]
//!   tabletop run [FILE]
//!   tabletop exec <LINE>...
//!   tabletop protocol
//!
//! Examples:
//!   tabletop commands.txt
//!   echo "PLACE 0,0,NORTH\nMOVE\nREPORT" | tabletop
//!   tabletop exec "PLACE 1,2,EAST" MOVE MOVE LEFT MOVE REPORT
//!   tabletop --width 10 --height 10 --verbose commands.txt

mod logging;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tabletop_robot::{Error, ErrorKind, Result, Table, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use tabletop_sim::{ExecutionStep, Outcome, Simulator, SimulatorConfig, WriterSink};
use tracing::info;

const PROTOCOL: &str = "\
Commands (one per line, keywords are case-insensitive):

  PLACE X,Y,F   put the robot at X,Y facing F (NORTH, EAST, SOUTH or WEST)
  MOVE          move one unit forward, unless that would leave the table
  LEFT          rotate 90 degrees counter-clockwise
  RIGHT         rotate 90 degrees clockwise
  REPORT        print X,Y,F
  EXIT          stop reading commands

Commands before the first valid PLACE are ignored, as are unknown or
malformed lines. The origin 0,0 is the south-west corner.";

#[derive(Parser)]
#[command(name = "tabletop")]
#[command(author, version, about = "Tabletop - drive a toy robot around a table")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Command file to run (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Table width
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Table height
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Reject trailing arguments on MOVE, LEFT, RIGHT, REPORT and EXIT
    #[arg(long, global = true)]
    strict: bool,

    /// Print the final robot state as JSON after the run
    #[arg(long, global = true)]
    json: bool,

    /// Print the execution trace to stderr after the run
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run commands from a file (stdin when omitted or "-")
    Run {
        /// Path to the command file
        file: Option<PathBuf>,
    },
    /// Run commands given as arguments, one line each
    Exec {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Show the command protocol
    Protocol,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SimulatorConfig {
        table: Table::new(cli.width, cli.height)?,
        strict: cli.strict,
        trace: cli.verbose,
    };

    match cli.command {
        Some(Commands::Protocol) => {
            println!("{}", PROTOCOL);
            Ok(())
        }
        Some(Commands::Exec { lines }) => {
            let script = lines.join("\n");
            simulate(config, script.as_bytes(), cli.verbose, cli.json)
        }
        Some(Commands::Run { file }) => {
            let input = open_input(file.as_deref().or(cli.file.as_deref()))?;
            simulate(config, input, cli.verbose, cli.json)
        }
        None => {
            let input = open_input(cli.file.as_deref())?;
            simulate(config, input, cli.verbose, cli.json)
        }
    }
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|e| {
                Error::from(e)
                    .with_operation("cli::open_input")
                    .with_context("path", path.display().to_string())
            })?;
            info!(path = %path.display(), "reading commands from file");
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn simulate(config: SimulatorConfig, input: impl BufRead, verbose: bool, json: bool) -> Result<()> {
    let mut sim = Simulator::with_config(config, WriterSink::stdout());
    let summary = sim.run(input)?;

    if verbose {
        print_trace(sim.trace());
    }

    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| {
            Error::new(ErrorKind::SerializationFailed, e.to_string())
                .with_operation("cli::simulate")
                .set_source(e)
        })?;
        println!("{}", rendered);
    }

    Ok(())
}

fn print_trace(trace: &[ExecutionStep]) {
    eprintln!("\n--- Execution Trace ({} steps) ---", trace.len());
    for step in trace {
        eprintln!("  {:3}. {} -> {}", step.step, step.line, describe(&step.outcome));
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Applied => "applied".to_string(),
        Outcome::Rejected => "rejected".to_string(),
        Outcome::Reported { output } => format!("reported {}", output),
        Outcome::Ignored { reason } => format!("ignored ({})", reason),
        Outcome::Exit => "exit".to_string(),
    }
}
