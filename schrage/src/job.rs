use rpq_parser::structs::{RpqJob, RpqProblem};
use std::ops::Index;

/// A single job of a `1|r_j|C_max` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job {
    /// 0-based position in the input
    pub id: usize,
    pub release: u64,
    pub processing: u64,
    pub delivery: u64,
}

impl Job {
    /// Processing plus delivery time, the priority used by Schrage's rule.
    pub fn tail(&self) -> u64 {
        self.processing + self.delivery
    }
}

/// The jobs of one instance in input order. Ids always equal positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Builds a job set from `(r, p, q)` rows, assigning ids by position.
    pub fn new(rows: impl IntoIterator<Item = (u64, u64, u64)>) -> Self {
        let jobs = rows
            .into_iter()
            .enumerate()
            .map(|(id, (release, processing, delivery))| Job {
                id,
                release,
                processing,
                delivery,
            })
            .collect();

        Self { jobs }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Input order as a permutation.
    pub fn identity(&self) -> Permutation {
        Permutation((0..self.len()).collect())
    }
}

impl Index<usize> for JobSet {
    type Output = Job;

    fn index(&self, id: usize) -> &Job {
        &self.jobs[id]
    }
}

impl From<&RpqProblem> for JobSet {
    fn from(problem: &RpqProblem) -> Self {
        Self::new(
            problem
                .jobs
                .iter()
                .map(|job| (job.release, job.processing, job.delivery)),
        )
    }
}

impl From<RpqProblem> for JobSet {
    fn from(problem: RpqProblem) -> Self {
        Self::from(&problem)
    }
}

impl From<&JobSet> for RpqProblem {
    fn from(jobs: &JobSet) -> Self {
        RpqProblem {
            jobs: jobs
                .iter()
                .map(|job| RpqJob {
                    release: job.release,
                    processing: job.processing,
                    delivery: job.delivery,
                })
                .collect(),
        }
    }
}

/// An ordering of all job ids of a [`JobSet`].
///
/// Every id in `0..len` appears exactly once. The order is only ever changed
/// through [`Permutation::swap`], so the length stays fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Returns `None` unless `order` contains every id in `0..order.len()` once.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        let permutation = Self(order);
        permutation.is_bijection().then_some(permutation)
    }

    /// Wraps an order produced inside the crate. Panics in debug builds if it
    /// is not a bijection, that would be a bug in the producing algorithm.
    pub(crate) fn new_unchecked(order: Vec<usize>) -> Self {
        let permutation = Self(order);
        debug_assert!(
            permutation.is_bijection(),
            "not a permutation: {:?}",
            permutation.0
        );
        permutation
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn swap(&mut self, i: usize, k: usize) {
        self.0.swap(i, k);
    }

    /// 0-based job ids in schedule order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Job ids in schedule order, counted from one for reporting.
    pub fn one_based(&self) -> Vec<usize> {
        self.0.iter().map(|id| id + 1).collect()
    }

    /// The jobs of `jobs` in schedule order.
    pub fn jobs<'a>(&'a self, jobs: &'a JobSet) -> impl Iterator<Item = &'a Job> + 'a {
        self.0.iter().map(move |&id| &jobs[id])
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.0.len()];

        self.0.iter().all(|&id| match seen.get_mut(id) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use rpq_parser::parse_rpq;

    use super::*;

    #[test]
    fn ids_follow_input_order() {
        let jobs = JobSet::new([(0, 3, 4), (1, 2, 1), (2, 1, 2)]);

        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().enumerate().all(|(index, job)| job.id == index));
        assert_eq!(jobs[2].tail(), 3);
    }

    #[test]
    fn from_parsed_problem() {
        let problem = parse_rpq(include_str!("../../data/data2.txt")).unwrap();
        let jobs = JobSet::from(&problem);

        assert_eq!(jobs.len(), 7);
        assert_eq!(
            jobs[1],
            Job {
                id: 1,
                release: 13,
                processing: 6,
                delivery: 26
            }
        );
        assert_eq!(RpqProblem::from(&jobs), problem);
    }

    #[test]
    fn permutation_validation() {
        assert!(Permutation::from_order(vec![2, 0, 1]).is_some());
        assert!(Permutation::from_order(vec![]).is_some());
        assert!(Permutation::from_order(vec![0, 0, 1]).is_none());
        assert!(Permutation::from_order(vec![0, 3, 1]).is_none());
    }

    #[test]
    fn swap_keeps_bijection() {
        let mut permutation = JobSet::new([(0, 1, 0), (0, 1, 0), (0, 1, 0)]).identity();

        permutation.swap(0, 2);
        permutation.swap(1, 1);

        assert_eq!(permutation.as_slice(), &[2, 1, 0]);
        assert_eq!(permutation.one_based(), vec![3, 2, 1]);
        assert!(permutation.is_bijection());
    }
}
