use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter, Log, Metadata, Record};

use framesim::input::{parse_references, read_references};
use framesim::render::{render_comparison, render_occupancy, render_trace};
use framesim::{compare, run, Policy, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(author, version, about = "framesim - simulate FIFO, LRU and Optimal page replacement")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Replacement policy (fifo, lru, optimal) [default: fifo]
    #[arg(short, long, conflicts_with = "compare")]
    policy: Option<Policy>,

    /// Number of physical frames
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    frames: usize,

    /// Read the reference string from a text file
    #[arg(short, long, conflicts_with = "refs")]
    input: Option<PathBuf>,

    /// Run every policy and print a summary
    #[arg(long)]
    compare: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Page references, e.g. `7 0 1 2 0 3 0 4`
    refs: Vec<String>,
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let references = match &cli.input {
        Some(path) => read_references(path)
            .with_context(|| format!("Failed to read references from {}", path.display()))?,
        None if !cli.refs.is_empty() => {
            parse_references(&cli.refs.join(" ")).context("Failed to parse references")?
        }
        None => bail!("No page references given: pass them as arguments or use --input"),
    };
    info!("{} references, {} frames", references.len(), cli.frames);

    if cli.compare {
        let reports = compare(cli.frames, &references, &Policy::ALL)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            print!("{}", render_comparison(&reports));
        }
    } else {
        let policy = cli.policy.unwrap_or(Policy::Fifo);
        let report = run(policy, cli.frames, &references)?;
        if cli.json {
            let mut value = serde_json::to_value(&report)?;
            value["occupancy"] = serde_json::json!(report.occupancy());
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            print!("{}", render_trace(&report));
            println!("{}", render_occupancy(&report));
            println!("{}", report.stats());
        }
    }

    Ok(())
}
