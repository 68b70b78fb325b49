#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};

mod commands;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Single machine scheduler for 1|r_j|C_max (Schrage's rule + pairwise swaps)
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a schedule for a given instance file
    Schedule(Schedule),
    /// Solve every instance file in a folder and write the results
    Benchmark(Benchmark),
    /// Write a random instance file
    Generate(Generate),
}

#[derive(Args, Debug)]
pub struct Schedule {
    /// Instance file: job count, then one `r p q` line per job
    #[arg(required = true)]
    path: PathBuf,

    /// Report the Schrage order without the swap pass
    #[arg(long)]
    no_refine: bool,

    /// Report job ids counted from zero
    #[arg(long)]
    zero_based: bool,
}

#[derive(Args, Debug)]
pub struct Benchmark {
    #[arg(required = true)]
    instance_folder: PathBuf,

    #[arg(required = true)]
    output: PathBuf,

    /// Solve the instances one after another
    #[arg(long)]
    sequential: bool,

    #[arg(long)]
    no_refine: bool,
}

#[derive(Args, Debug)]
pub struct Generate {
    /// Target file for output
    #[arg(required = true)]
    output: PathBuf,

    /// Number of jobs to generate
    #[arg(short = 'n', long, env, default_value_t = 20)]
    jobs: usize,

    /// Seed for reproducible instances
    #[arg(short, long, env)]
    seed: Option<u64>,

    #[arg(long, env, default_value_t = 100)]
    max_release: u64,

    #[arg(long, env, default_value_t = 30)]
    max_processing: u64,

    #[arg(long, env, default_value_t = 100)]
    max_delivery: u64,
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Schedule(schedule) => commands::schedule(schedule),
        Commands::Benchmark(benchmark) => commands::benchmark(benchmark),
        Commands::Generate(generate) => commands::generate(generate),
    } {
        error!("An error occurred: {err:#}");
        std::process::exit(1);
    }
}
