#[macro_use]
extern crate log;

use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::Parser;
use rand::prelude::*;
use range_or::{
    gen::{generate, GenParams},
    input::write_cases,
};

/// Generates random range OR test cases.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of test cases
    #[arg(long, default_value_t = 10)]
    cases: usize,

    /// Upper bound of items per case
    #[arg(long, default_value_t = 100000)]
    max_items: usize,

    /// Upper bound of queries per case
    #[arg(long, default_value_t = 10000)]
    max_queries: usize,

    /// RNG seed (falls back to RANGE_OR_SEED, then to a random seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    anyhow::ensure!(
        args.max_items >= 1 && args.max_queries >= 1,
        "max-items and max-queries must be at least 1"
    );

    let seed = match args.seed {
        Some(seed) => seed,
        None => match env::var("RANGE_OR_SEED") {
            Ok(seed) => seed
                .parse()
                .with_context(|| format!("RANGE_OR_SEED must be an integer: '{}'", seed))?,
            Err(_) => random(),
        },
    };
    info!("seed: {}", seed);

    let params = GenParams {
        cases: args.cases,
        max_items: args.max_items,
        max_queries: args.max_queries,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let cases = generate(&mut rng, &params);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    write_cases(BufWriter::new(out), &cases).context("failed to output cases")?;

    Ok(())
}
