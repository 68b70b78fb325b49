use rand::Rng;

use crate::job::JobSet;

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub jobs: usize,
    pub max_release: u64,
    pub max_processing: u64,
    pub max_delivery: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            jobs: 20,
            max_release: 100,
            max_processing: 30,
            max_delivery: 100,
        }
    }
}

/// Draws a random instance. Release and delivery times are uniform from 0,
/// processing times uniform from 1 so every job occupies the machine.
pub fn generate<R: Rng>(rng: &mut R, options: &GeneratorOptions) -> JobSet {
    let max_processing = options.max_processing.max(1);

    JobSet::new(
        (0..options.jobs)
            .map(|_| {
                (
                    rng.gen_range(0..=options.max_release),
                    rng.gen_range(1..=max_processing),
                    rng.gen_range(0..=options.max_delivery),
                )
            })
            .collect::<Vec<_>>(),
    )
}
