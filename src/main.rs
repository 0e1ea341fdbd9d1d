#[macro_use]
extern crate log;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::Parser;

/// Answers range OR queries for every test case and prints them in order.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            range_or::case::run(BufReader::new(file), out)?;
        }
        None => {
            let stdin = io::stdin();
            range_or::case::run(stdin.lock(), out)?;
        }
    }

    #[cfg(target_os = "linux")]
    {
        match range_or::memory::current_memory_usage() {
            Ok(bytes) => debug!("memory usage: {} bytes", bytes),
            Err(e) => warn!("failed to read memory usage: {:#}", e),
        }
    }

    Ok(())
}
