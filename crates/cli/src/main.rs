//! RV32 single-cycle simulator CLI.
//!
//! This binary runs one hex program to completion. It performs:
//! 1. **Loading:** Reads the program file (one hex byte per line) and an optional JSON config.
//! 2. **Execution:** Runs cycles until the PC leaves the program or a trap aborts the run.
//! 3. **Reporting:** Prints `(a0,a1)` on success; dumps registers on a trap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use rv32sim_core::Simulator;
use rv32sim_core::common::SimError;
use rv32sim_core::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RV32 single-cycle instruction simulator",
    long_about = "Run a program given as one hex byte per line (four lines per little-endian instruction word).\n\nOn success prints the contents of a0 and a1 as `(a0,a1)`.\n\nExamples:\n  sim program.txt\n  sim program.txt --trace --stats\n  sim program.txt --config sim.json --dump-regs"
)]
struct Cli {
    /// Program file: one hex byte per line.
    file: PathBuf,

    /// JSON configuration file (start PC, data memory size, tracing).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every retired instruction to stderr.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(short, long)]
    stats: bool,

    /// Print the register file after the run.
    #[arg(short, long)]
    dump_regs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.trace);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the default level.
fn setup_logger(trace: bool) {
    let level = if trace {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration and program, runs to completion and reports.
///
/// On a trap the machine state is dumped before the error is returned.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }

    let mut sim = Simulator::from_file(&config, &cli.file)?;

    if let Err(e) = sim.run() {
        sim.cpu.dump_state();
        if cli.stats {
            sim.cpu.stats.print();
        }
        return Err(e);
    }

    let (a0, a1) = sim.result();
    println!("({a0},{a1})");

    if cli.dump_regs {
        sim.cpu.dump_state();
    }
    if cli.stats {
        sim.cpu.stats.print();
    }
    Ok(())
}
