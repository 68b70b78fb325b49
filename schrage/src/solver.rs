use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{
    job::{JobSet, Permutation},
    refiner::{refine, Refinement},
    sequencer::schrage,
};

#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Run the pairwise-swap pass after Schrage's construction
    pub refine: bool,
    /// Solve independent instances in parallel in [`crate::batch::solve_all`]
    pub parallel: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            refine: true,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub permutation: Permutation,
    /// C_max of the order Schrage's rule produced
    pub schrage_cmax: u64,
    /// C_max of `permutation`
    pub cmax: u64,
    pub refinement: Option<Refinement>,
    pub duration: Duration,
}

/// Schrage's construction followed by one refinement pass.
pub fn solve(jobs: &JobSet, options: &SolverOptions) -> Solution {
    let start = Instant::now();

    let mut permutation = schrage(jobs);
    let schrage_cmax = jobs.evaluate(&permutation);
    debug!(
        "schrage order: {:?}, cmax: {schrage_cmax}",
        permutation.as_slice()
    );

    let refinement = options
        .refine
        .then(|| refine(jobs, &mut permutation, schrage_cmax));
    if let Some(refinement) = &refinement {
        debug!("refinement: {refinement:?}");
    }

    let cmax = jobs.evaluate(&permutation);
    debug_assert_eq!(cmax, refinement.map_or(schrage_cmax, |r| r.cmax));

    let duration = start.elapsed();
    info!(
        "solved {} jobs: cmax {cmax} (schrage {schrage_cmax}) in {duration:?}",
        jobs.len()
    );

    Solution {
        permutation,
        schrage_cmax,
        cmax,
        refinement,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use rpq_parser::parse_rpq;

    use super::*;

    #[test]
    fn end_to_end() {
        let problem = parse_rpq("3\n0 3 4\n1 2 1\n2 1 2").unwrap();
        let jobs = JobSet::from(problem);

        let solution = solve(&jobs, &SolverOptions::default());

        assert_eq!(solution.schrage_cmax, 8);
        assert_eq!(solution.cmax, 7);
        assert_eq!(solution.permutation.one_based(), vec![1, 3, 2]);
    }

    #[test]
    fn without_refinement() {
        let jobs = JobSet::from(parse_rpq(include_str!("../../data/data1.txt")).unwrap());
        let options = SolverOptions {
            refine: false,
            ..SolverOptions::default()
        };

        let solution = solve(&jobs, &options);

        assert!(solution.refinement.is_none());
        assert_eq!(solution.cmax, solution.schrage_cmax);
        assert_eq!(solution.permutation.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn empty_instance() {
        let solution = solve(&JobSet::default(), &SolverOptions::default());

        assert!(solution.permutation.is_empty());
        assert_eq!(solution.cmax, 0);
        assert_eq!(solution.schrage_cmax, 0);
    }

    #[test]
    fn data_files_improve_or_hold() {
        for content in [
            include_str!("../../data/data2.txt"),
            include_str!("../../data/data3.txt"),
        ] {
            let jobs = JobSet::from(parse_rpq(content).unwrap());

            let solution = solve(&jobs, &SolverOptions::default());

            assert!(solution.cmax <= solution.schrage_cmax);
            assert!(solution.permutation.is_bijection());
            assert_eq!(solution.cmax, jobs.evaluate(&solution.permutation));
        }
    }
}
