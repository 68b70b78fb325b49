use anyhow::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use rpq_parser::structs::RpqProblem;
use schrage::generator::GeneratorOptions;

use crate::Generate;

pub fn generate(generate: Generate) -> Result<()> {
    let mut rng = match generate.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let options = GeneratorOptions {
        jobs: generate.jobs,
        max_release: generate.max_release,
        max_processing: generate.max_processing,
        max_delivery: generate.max_delivery,
    };
    let jobs = schrage::generator::generate(&mut rng, &options);

    std::fs::write(&generate.output, RpqProblem::from(&jobs).to_string())?;

    info!("Wrote {} jobs to: {:?}", jobs.len(), generate.output);

    Ok(())
}
