use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

const SAMPLE_OFFERS: &str = "crates/pool_cli/data/sample_offers.json";
const SAMPLE_PICKUP: &str = "-1.2864,36.8172";
const SAMPLE_DROPOFF: &str = "-1.3192,36.9278";
/// Before every departure in the sample data.
const SAMPLE_AFTER: &str = "2030-06-10T00:00:00Z";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-pool workspace",
    long_about = "A unified CLI for running the demo search, benchmarks,\n\
                  and CI checks in the ride-pool workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pool_search against the bundled sample offers
    Search {
        /// Search by address text only (departure-time ordering)
        #[arg(long)]
        addresses_only: bool,
        /// Print JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the demo search in both modes
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_search(addresses_only: bool, json: bool) {
    let mut args = vec![
        "run",
        "-p",
        "pool_cli",
        "--",
        "--offers",
        SAMPLE_OFFERS,
        "--after",
        SAMPLE_AFTER,
    ];
    if addresses_only {
        args.extend([
            "--pickup-address",
            "Kenyatta Avenue, Nairobi",
            "--dropoff-address",
            "JKIA Terminal 1A",
        ]);
    } else {
        args.extend(["--pickup", SAMPLE_PICKUP, "--dropoff", SAMPLE_DROPOFF]);
    }
    if json {
        args.push("--json");
    }
    run_cargo(&args);
}

fn ci_check() {
    step("Format check");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]);

    step("Tests");
    run_cargo(&["test", "--workspace"]);
}

fn ci_demo() {
    step("Demo search (coordinates)");
    run_search(false, false);

    step("Demo search (addresses only)");
    run_search(true, false);
}

fn ci_bench() {
    step("Benchmarks");
    run_cargo(&["bench", "-p", "pool_core"]);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            addresses_only,
            json,
        } => run_search(addresses_only, json),
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demo => ci_demo(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_demo();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
