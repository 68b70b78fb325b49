use log::trace;

use crate::job::{JobSet, Permutation};

/// Outcome of one refinement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refinement {
    /// C_max of the permutation after the pass
    pub cmax: u64,
    /// Number of candidate swaps evaluated, always `n * n`
    pub evaluated: usize,
    /// Number of swaps kept
    pub accepted: usize,
}

/// Runs exactly one pass of pairwise-swap local search over `permutation`.
///
/// For every pair of positions `(i, k)`, `i == k` included, the two jobs are
/// exchanged and the swap is kept only if it strictly lowers C_max below the
/// best value so far. A kept swap changes what every later pair sees. The
/// pass always visits all `n * n` pairs and is not repeated, so the result is
/// not necessarily a fixed point.
///
/// `cmax` has to be the C_max of `permutation` as passed in.
pub fn refine(jobs: &JobSet, permutation: &mut Permutation, cmax: u64) -> Refinement {
    let n = permutation.len();
    let mut refinement = Refinement {
        cmax,
        ..Refinement::default()
    };

    for i in 0..n {
        for k in 0..n {
            permutation.swap(i, k);
            let candidate = jobs.evaluate(permutation);
            refinement.evaluated += 1;

            if candidate < refinement.cmax {
                trace!("swap ({i}, {k}): {} -> {candidate}", refinement.cmax);
                refinement.cmax = candidate;
                refinement.accepted += 1;
            } else {
                permutation.swap(i, k);
            }
        }
    }

    refinement
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::*;
    use crate::{
        generator::{generate, GeneratorOptions},
        sequencer::schrage,
    };

    #[test]
    fn three_job_instance() {
        let jobs = JobSet::new([(0, 3, 4), (1, 2, 1), (2, 1, 2)]);
        let mut permutation = schrage(&jobs);
        let cmax = jobs.evaluate(&permutation);

        let refinement = refine(&jobs, &mut permutation, cmax);

        // only the (1, 2) exchange improves: 8 -> 7
        assert_eq!(permutation.as_slice(), &[0, 2, 1]);
        assert_eq!(refinement.cmax, 7);
        assert_eq!(refinement.evaluated, 9);
        assert_eq!(refinement.accepted, 1);
        assert_eq!(jobs.evaluate(&permutation), 7);
    }

    #[test]
    fn nothing_to_swap() {
        let empty = JobSet::default();
        let mut permutation = empty.identity();
        assert_eq!(refine(&empty, &mut permutation, 0).cmax, 0);
        assert!(permutation.is_empty());

        let single = JobSet::new([(5, 3, 2)]);
        let mut permutation = single.identity();
        let refinement = refine(&single, &mut permutation, 10);
        assert_eq!(refinement.cmax, 10);
        assert_eq!(refinement.accepted, 0);
        assert_eq!(permutation.as_slice(), &[0]);
    }

    #[test]
    fn keeps_improving_swap_of_two_jobs() {
        let jobs = JobSet::new([(0, 3, 0), (0, 2, 5)]);
        let mut permutation = jobs.identity();

        let cmax = jobs.evaluate(&permutation);
        assert_eq!(cmax, 10);

        let refinement = refine(&jobs, &mut permutation, cmax);

        assert_eq!(permutation.as_slice(), &[1, 0]);
        assert_eq!(refinement.cmax, 7);
    }

    #[test]
    fn never_worse_and_stable() {
        let mut rng = StdRng::seed_from_u64(11);

        for size in [2, 5, 9, 16, 25] {
            let options = GeneratorOptions {
                jobs: size,
                ..GeneratorOptions::default()
            };
            let jobs = generate(&mut rng, &options);

            let mut order: Vec<usize> = (0..size).collect();
            order.shuffle(&mut rng);
            let mut permutation = Permutation::from_order(order).unwrap();
            let before = jobs.evaluate(&permutation);

            let refinement = refine(&jobs, &mut permutation, before);

            assert!(refinement.cmax <= before);
            assert!(permutation.is_bijection());
            assert_eq!(refinement.cmax, jobs.evaluate(&permutation));
            assert_eq!(refinement.evaluated, size * size);

            let again = refine(&jobs, &mut permutation, refinement.cmax);
            assert!(again.cmax <= refinement.cmax);
        }
    }

    #[test]
    fn rerun_on_local_optimum_changes_nothing() {
        let jobs = JobSet::new([(0, 3, 4), (1, 2, 1), (2, 1, 2)]);
        let mut permutation = Permutation::from_order(vec![0, 2, 1]).unwrap();

        let refinement = refine(&jobs, &mut permutation, 7);

        assert_eq!(refinement.accepted, 0);
        assert_eq!(refinement.cmax, 7);
        assert_eq!(permutation.as_slice(), &[0, 2, 1]);
    }
}
