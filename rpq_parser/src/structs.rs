use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpqProblem {
    // jobs in input order, the position is the job id
    pub jobs: Vec<RpqJob>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpqJob {
    pub release: u64,
    pub processing: u64,
    pub delivery: u64,
}

/// Writes the problem back in the same format [`crate::parse_rpq`] reads.
impl fmt::Display for RpqProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.jobs.len())?;

        for job in &self.jobs {
            writeln!(f, "{} {} {}", job.release, job.processing, job.delivery)?;
        }

        Ok(())
    }
}
