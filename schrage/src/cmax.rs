use crate::job::{Job, JobSet, Permutation};

/// Simulates one machine running `jobs` in the given order, without
/// preemption and never before a job's release time, and returns the largest
/// completion time plus delivery time. An empty order yields 0.
pub fn cmax<'a, I>(jobs: I) -> u64
where
    I: IntoIterator<Item = &'a Job>,
{
    let (_, cmax) = jobs.into_iter().fold((0_u64, 0_u64), |(time, cmax), job| {
        let completion = time.max(job.release) + job.processing;
        (completion, cmax.max(completion + job.delivery))
    });

    cmax
}

/// One row of a simulated schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledJob {
    pub id: usize,
    pub start: u64,
    pub completion: u64,
    /// Completion plus delivery time
    pub delivered: u64,
}

/// Same simulation as [`cmax`], keeping the timing of every job.
pub fn trace<'a, I>(jobs: I) -> Vec<ScheduledJob>
where
    I: IntoIterator<Item = &'a Job>,
{
    let mut time = 0_u64;

    jobs.into_iter()
        .map(|job| {
            let start = time.max(job.release);
            time = start + job.processing;

            ScheduledJob {
                id: job.id,
                start,
                completion: time,
                delivered: time + job.delivery,
            }
        })
        .collect()
}

impl JobSet {
    /// C_max of running the jobs in `permutation` order.
    pub fn evaluate(&self, permutation: &Permutation) -> u64 {
        cmax(permutation.jobs(self))
    }

    pub fn trace(&self, permutation: &Permutation) -> Vec<ScheduledJob> {
        trace(permutation.jobs(self))
    }
}
