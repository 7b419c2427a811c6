//! Reference CLI for the `sam` suffix automaton library.
//!
//! This binary is an external collaborator, not part of the library's
//! contract (see the crate's design notes on concurrency and error
//! handling): it exists so a human or a batch test harness can drive
//! [`sam::algorithms::suffix_automaton::SuffixAutomaton`] without writing
//! Rust. Two subcommands are offered:
//!
//! - `repl`: build an automaton from a text and answer `contains`/`first`/
//!   `positions` queries interactively, mirroring the original tool's
//!   `[o]ccurrence`/`[f]irst`/`[a]ll`/`[q]uit` menu.
//! - `batch`: read a `positions.in`-format file, run every recorded search
//!   against its automaton, and write a results CSV.

mod batch;
mod repl;

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use sam::SamError;

/// Online suffix automaton construction and substring-occurrence queries.
#[derive(Parser)]
#[command(name = "sam-cli", version, about)]
struct Cli {
    /// Transition-table backend to build the automaton with.
    #[arg(long, global = true, value_enum, default_value_t = Backend::Dense)]
    backend: Backend,

    /// Suppress all but warning/error log output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase log verbosity (repeatable: -v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Backend {
    Dense,
    Sparse,
}

#[derive(Subcommand)]
enum Command {
    /// Build an automaton from a text and query it interactively.
    Repl {
        /// Read the text from this file instead of standard input.
        #[arg(long)]
        file: Option<String>,
    },
    /// Run the `positions.in` batch harness and write a results CSV.
    Batch {
        /// Path to the batch input file.
        #[arg(long, default_value = "positions.in")]
        input: String,
        /// Path to write the results CSV to.
        #[arg(long, default_value = "positionsresults.csv")]
        output: String,
    },
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn read_text(file: Option<&str>) -> Result<String, SamError> {
    let mut text = String::new();
    match file {
        Some(path) => {
            text = fs::read_to_string(path)?;
        }
        None => {
            std::io::stdin().read_to_string(&mut text)?;
        }
    }
    // A trailing newline from an interactive paste or `echo` isn't part of
    // the intended text; the original tool read a fixed-length buffer and
    // never saw one.
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}

fn run() -> Result<(), SamError> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Command::Repl { file } => {
            let text = read_text(file.as_deref())?;
            log::info!(
                "constructing automaton of size {} ({:?} backend)",
                text.len(),
                backend_name(cli.backend)
            );
            match cli.backend {
                Backend::Dense => repl::run::<sam::algorithms::suffix_automaton::DenseTransitions>(&text),
                Backend::Sparse => {
                    repl::run::<sam::algorithms::suffix_automaton::SparseTransitions>(&text)
                }
            }
        }
        Command::Batch { input, output } => match cli.backend {
            Backend::Dense => {
                batch::run::<sam::algorithms::suffix_automaton::DenseTransitions>(input, output)
            }
            Backend::Sparse => {
                batch::run::<sam::algorithms::suffix_automaton::SparseTransitions>(input, output)
            }
        },
    }
}

fn backend_name(backend: Backend) -> &'static str {
    match backend {
        Backend::Dense => "dense",
        Backend::Sparse => "sparse",
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
