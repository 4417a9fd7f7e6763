//! pagesim CLI: compare page-replacement policies on a reference string.
//!
//! ```text
//! pagesim simulate --algorithm FIFO --frames 3 1 2 3 4 1 2 5 1 2 3 4 5
//! pagesim compare --frames 4 --file refs.txt
//! pagesim sweep --algorithm FIFO --max-frames 6 1 2 3 4 1 2 5 1 2 3 4 5
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pagesim::adapter::{
    format_result, parse_algorithm, parse_frame_count, parse_reference_string,
    read_reference_file,
};
use pagesim::common::config::{DEFAULT_FRAME_CAPACITY, DEFAULT_SWEEP_MAX_FRAMES};
use pagesim::engine::{belady_anomalies, compare, sweep};
use pagesim::{Access, PageId, ReferenceString, Result, Simulation, SimulationReport};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate LRU, FIFO and Optimal page replacement")]
#[command(version)]
struct Cli {
    /// Print hit/fault statistics after each run
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count page faults for one algorithm
    Simulate {
        /// Algorithm to use (LRU, FIFO or Optimal)
        #[arg(short, long, default_value = "LRU")]
        algorithm: String,

        /// Number of page frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY.to_string())]
        frames: String,

        /// Print every access with the resident set after it
        #[arg(short, long)]
        trace: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Run all three algorithms on the same input
    Compare {
        /// Number of page frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY.to_string())]
        frames: String,

        #[command(flatten)]
        input: Input,
    },

    /// Fault counts for every frame count from 0 up to a maximum
    Sweep {
        /// Algorithm to use (LRU, FIFO or Optimal)
        #[arg(short, long, default_value = "FIFO")]
        algorithm: String,

        /// Largest frame count to simulate
        #[arg(short, long, default_value_t = DEFAULT_SWEEP_MAX_FRAMES.to_string())]
        max_frames: String,

        #[command(flatten)]
        input: Input,
    },
}

/// Where the reference string comes from.
#[derive(Args)]
struct Input {
    /// Page numbers, space separated (may also be quoted as one argument)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    reference: Vec<String>,

    /// Read the reference string from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl Input {
    fn load(&self) -> Result<ReferenceString> {
        match &self.file {
            Some(path) => read_reference_file(path),
            None => parse_reference_string(&self.reference.join(" ")),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Simulate {
            algorithm,
            frames,
            trace,
            input,
        } => cmd_simulate(algorithm, frames, *trace, input, cli.verbose),
        Commands::Compare { frames, input } => cmd_compare(frames, input, cli.verbose),
        Commands::Sweep {
            algorithm,
            max_frames,
            input,
        } => cmd_sweep(algorithm, max_frames, input),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn cmd_simulate(
    algorithm: &str,
    frames: &str,
    trace: bool,
    input: &Input,
    verbose: bool,
) -> Result<()> {
    let capacity = parse_frame_count(frames)?;
    let reference = input.load()?;
    let algorithm = parse_algorithm(algorithm)?;

    let report = Simulation::new(algorithm, capacity)
        .with_trace(trace)
        .run(reference.as_slice());

    if let Some(steps) = &report.trace {
        println!("{:>5}  {:>8}  {:<12}  resident", "step", "page", "outcome");
        for step in steps {
            let outcome = match step.outcome {
                Access::Hit => "hit".to_string(),
                Access::Fault { evicted: None } => "fault".to_string(),
                Access::Fault {
                    evicted: Some(victim),
                } => format!("fault -{victim}"),
            };
            println!(
                "{:>5}  {:>8}  {:<12}  [{}]",
                step.position,
                step.page,
                outcome,
                join_pages(&step.resident)
            );
        }
        println!();
    }

    print_report(&report, verbose);
    Ok(())
}

fn cmd_compare(frames: &str, input: &Input, verbose: bool) -> Result<()> {
    let capacity = parse_frame_count(frames)?;
    let reference = input.load()?;

    for report in compare(capacity, reference.as_slice()) {
        print_report(&report, verbose);
    }
    Ok(())
}

fn cmd_sweep(algorithm: &str, max_frames: &str, input: &Input) -> Result<()> {
    let max_frames = parse_frame_count(max_frames)?;
    let reference = input.load()?;
    let algorithm = parse_algorithm(algorithm)?;

    // Faults stop changing once every page fits
    let max_frames = max_frames.min(reference.len());
    let points = sweep(algorithm, reference.as_slice(), 0..=max_frames);
    let anomalies = belady_anomalies(&points);

    println!("{algorithm} page faults by frame count");
    for point in &points {
        let marker = if anomalies.contains(&point.capacity) {
            "  (Belady's anomaly)"
        } else {
            ""
        };
        println!("{:>5} frames: {:>6}{}", point.capacity, point.faults, marker);
    }
    Ok(())
}

fn print_report(report: &SimulationReport, verbose: bool) {
    println!("{}", format_result(report.algorithm, report.faults()));
    if verbose {
        eprintln!("  {}", report.stats);
        eprintln!("  resident: [{}]", join_pages(&report.resident));
    }
}

fn join_pages(pages: &[PageId]) -> String {
    pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
