use anyhow::{Context, Result};
use log::info;
use rpq_parser::parse_rpq;
use schrage::{batch::solve_all, JobSet, SolverOptions};
use std::{fs, path::PathBuf, time::Instant};

use crate::Benchmark;

pub fn benchmark(benchmark: Benchmark) -> Result<()> {
    if !benchmark.instance_folder.is_dir() {
        anyhow::bail!("instance_folder is not a directory")
    }

    let mut paths = benchmark
        .instance_folder
        .read_dir()?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<PathBuf>, _>>()?;
    paths.retain(|path| path.is_file());
    paths.sort();

    let instances = paths
        .iter()
        .map(|path| -> Result<JobSet> {
            let content = fs::read_to_string(path)?;
            let problem =
                parse_rpq(&content).with_context(|| format!("Failed to parse {path:?}"))?;
            Ok(JobSet::from(problem))
        })
        .collect::<Result<Vec<JobSet>>>()?;

    let options = SolverOptions {
        refine: !benchmark.no_refine,
        parallel: !benchmark.sequential,
    };

    let started = Instant::now();
    let solutions = solve_all(&instances, &options);
    info!(
        "solved {} instances in {:?}",
        solutions.len(),
        started.elapsed()
    );

    let scheduling_results: Vec<String> = paths
        .iter()
        .zip(&solutions)
        .map(|(path, solution)| {
            format!(
                "{path:?}: {} ({}) {:?}",
                solution.cmax, solution.schrage_cmax, solution.duration
            )
        })
        .collect();

    fs::write(&benchmark.output, scheduling_results.join("\n"))?;
    info!("Wrote benchmark results to: {:?}", benchmark.output);

    Ok(())
}
