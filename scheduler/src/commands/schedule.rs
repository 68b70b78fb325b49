use anyhow::{Context, Result};
use log::{debug, log_enabled, trace, Level};
use rpq_parser::parse_rpq;
use schrage::{solve, JobSet, SolverOptions};
use std::fs;

use crate::Schedule;

pub fn schedule(schedule: Schedule) -> Result<()> {
    let contents = fs::read_to_string(&schedule.path)
        .with_context(|| format!("Failed to read {:?}", schedule.path))?;
    trace!("input file contents: {contents}");

    let problem = parse_rpq(&contents)?;
    let jobs = JobSet::from(problem);
    debug!("parsed {} jobs from {:?}", jobs.len(), schedule.path);

    let options = SolverOptions {
        refine: !schedule.no_refine,
        parallel: false,
    };
    let solution = solve(&jobs, &options);

    if log_enabled!(Level::Trace) {
        for row in jobs.trace(&solution.permutation) {
            trace!(
                "job {}: start {}, completion {}, delivered {}",
                row.id,
                row.start,
                row.completion,
                row.delivered
            );
        }
    }

    let order = if schedule.zero_based {
        solution.permutation.as_slice().to_vec()
    } else {
        solution.permutation.one_based()
    };
    let order: Vec<String> = order.into_iter().map(|id| id.to_string()).collect();

    println!("order: {}", order.join(" "));
    println!("schrage cmax: {}", solution.schrage_cmax);
    println!("cmax: {}", solution.cmax);
    println!("time: {:?}", solution.duration);

    Ok(())
}
