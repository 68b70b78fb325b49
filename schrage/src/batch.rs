use rayon::prelude::*;

use crate::{
    job::JobSet,
    solver::{solve, Solution, SolverOptions},
};

/// Solves every instance on its own. With `options.parallel` the instances are
/// spread over the rayon pool; results keep the order of `instances` either way.
pub fn solve_all(instances: &[JobSet], options: &SolverOptions) -> Vec<Solution> {
    if options.parallel {
        instances
            .par_iter()
            .map(|jobs| solve(jobs, options))
            .collect()
    } else {
        instances.iter().map(|jobs| solve(jobs, options)).collect()
    }
}
