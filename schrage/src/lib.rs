pub mod batch;
pub mod cmax;
pub mod generator;
pub mod job;
pub mod refiner;
pub mod sequencer;
pub mod solver;

pub use job::{Job, JobSet, Permutation};
pub use solver::{solve, Solution, SolverOptions};
