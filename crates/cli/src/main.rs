//! CPU scheduling simulator CLI.
//!
//! This binary is the single entry point for running workloads. It performs:
//! 1. **Direct run:** Load a descriptor directory and run one policy chosen on
//!    the command line.
//! 2. **Interactive run:** With no policy given, present the policy menu and
//!    prompt for a quantum when round-robin is chosen.
//! 3. **Reporting:** Render an ASCII Gantt timeline and a metrics table, or
//!    emit the activity log and metrics as JSON.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use schedsim_core::sched::{Interval, ProcessMetrics};
use schedsim_core::sim::loader;
use schedsim_core::{Config, ExecutionEngine, Policy, Scheduler, SimError};

mod report;

#[derive(Parser, Debug)]
#[command(
    name = "schedsim",
    author,
    version,
    about = "Deterministic CPU scheduling simulator",
    long_about = "Run a workload of process descriptors under FCFS, RR, SPN, or SRT.\n\nA workload is a directory of *.txt descriptors: first line arrival time, one\ninstruction per following line. Omit --policy for an interactive menu.\n\nExamples:\n  schedsim run -d workloads/basic\n  schedsim run -d workloads/basic -p rr -q 2\n  schedsim run -d workloads/basic -p srt --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a descriptor directory under a scheduling policy.
    Run {
        /// Directory containing process descriptor files (*.txt).
        #[arg(short, long)]
        dir: PathBuf,

        /// Scheduling policy; omit for an interactive menu.
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Round-robin quantum in instructions (defaults to the configured value).
        #[arg(short, long)]
        quantum: Option<u64>,

        /// JSON configuration file (num_frames, time_quantum).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit the activity log and metrics as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
}

/// Policy selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    /// First come first serve.
    Fcfs,
    /// Round robin.
    Rr,
    /// Shortest process next.
    Spn,
    /// Shortest remaining time.
    Srt,
}

/// Everything the reporting surface needs, in one serializable record.
#[derive(Debug, Serialize)]
struct Report<'a> {
    policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantum: Option<u64>,
    intervals: &'a [Interval],
    metrics: &'a [ProcessMetrics],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run {
            dir,
            policy,
            quantum,
            config,
            json,
        }) => cmd_run(&dir, policy, quantum, config.as_deref(), json),
        None => {
            eprintln!("schedsim: run a workload under a scheduling policy");
            eprintln!();
            eprintln!("  schedsim run -d <dir>              Interactive policy menu");
            eprintln!("  schedsim run -d <dir> -p rr -q 2   Round robin, quantum 2");
            eprintln!();
            eprintln!("  schedsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Loads the workload, runs the chosen policy, and renders the report.
///
/// Fatal simulator errors are reported to stderr and exit with code 1.
fn cmd_run(
    dir: &Path,
    policy: Option<PolicyArg>,
    quantum: Option<u64>,
    config_path: Option<&Path>,
    json: bool,
) {
    let config = config_path.map_or_else(
        || Ok(Config::default()),
        |path| {
            let text = fs::read_to_string(path).map_err(SimError::from)?;
            Config::from_json(&text)
        },
    );
    let config = config.unwrap_or_else(|e| fatal(&e));

    let policy = resolve_policy(policy, quantum, &config);
    if let Err(e) = run_workload(dir, policy, &config, json) {
        fatal(&e);
    }
}

/// Turns the command-line selection (or the interactive menu) into a policy.
fn resolve_policy(policy: Option<PolicyArg>, quantum: Option<u64>, config: &Config) -> Policy {
    match policy {
        Some(PolicyArg::Fcfs) => Policy::Fcfs,
        Some(PolicyArg::Rr) => Policy::Rr {
            quantum: quantum.unwrap_or(config.time_quantum),
        },
        Some(PolicyArg::Spn) => Policy::Spn,
        Some(PolicyArg::Srt) => Policy::Srt,
        None => menu_policy(quantum, config),
    }
}

/// Interactive fallback: a numbered policy menu on stdin.
fn menu_policy(quantum: Option<u64>, config: &Config) -> Policy {
    println!("Please select a scheduling algorithm:");
    println!("  1. First Come First Serve (FCFS)");
    println!("  2. Round Robin (RR)");
    println!("  3. Shortest Process Next (SPN)");
    println!("  4. Shortest Remaining Time (SRT)");
    print!("Enter the number corresponding to your choice: ");

    match prompt_number() {
        Some(1) => Policy::Fcfs,
        Some(2) => {
            let quantum = quantum.unwrap_or_else(|| {
                print!("Enter the time quantum for Round Robin scheduling: ");
                prompt_number().unwrap_or(config.time_quantum)
            });
            Policy::Rr { quantum }
        }
        Some(3) => Policy::Spn,
        Some(4) => Policy::Srt,
        _ => {
            eprintln!("Invalid choice. Exiting.");
            process::exit(1);
        }
    }
}

/// Reads one integer from stdin, flushing the pending prompt first.
fn prompt_number() -> Option<u64> {
    io::stdout().flush().ok()?;
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}

/// Loads descriptors, measures bursts, runs the policy, and prints the report.
fn run_workload(dir: &Path, policy: Policy, config: &Config, json: bool) -> Result<(), SimError> {
    let mut scheduler = Scheduler::from_config(config);
    for process in loader::load_directory(dir)? {
        scheduler.add_process(process);
    }

    let mut engine = ExecutionEngine::new();
    scheduler.compute_burst_times(&mut engine)?;
    scheduler.run(&mut engine, policy)?;

    let metrics = scheduler.performance_metrics()?;
    let quantum = match policy {
        Policy::Rr { quantum } => Some(quantum),
        _ => None,
    };

    if json {
        let report = Report {
            policy: policy.to_string(),
            quantum,
            intervals: scheduler.activity_log().intervals(),
            metrics: &metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            report::render_gantt(scheduler.activity_log(), &policy.to_string(), quantum)
        );
        println!();
        print!(
            "{}",
            report::render_metrics_table(&metrics, &policy.to_string(), quantum)
        );
    }
    Ok(())
}

/// Reports a fatal error and exits.
fn fatal(error: &SimError) -> ! {
    eprintln!("[!] FATAL: {error}");
    process::exit(1);
}
