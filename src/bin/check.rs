#[macro_use]
extern crate log;

use std::{fs, path::PathBuf, time::Instant};

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use easy_parallel::Parallel;
use range_or::{
    case::render,
    input::parse_cases,
    judge::{compare, Verdict},
};

/// Verifies the segment tree answers against the brute force answers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file of test cases
    input: PathBuf,

    /// Expected output to judge the tree answers against
    #[arg(short, long)]
    answer: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let src = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let cases = parse_cases(&src)?;
    info!("{} cases loaded", cases.len());

    let start = Instant::now();
    let tree_answers = cases.iter().map(|case| case.solve()).collect::<Vec<_>>();
    info!("segment tree: {:?}", start.elapsed());

    let start = Instant::now();
    let brute_answers = Parallel::new()
        .each(cases.iter(), |case| case.solve_brute())
        .run();
    info!("brute force: {:?}", start.elapsed());

    let output = render(&tree_answers)?;
    let mut failed = false;

    match compare(&output, &render(&brute_answers)?) {
        Verdict::Accepted => println!("brute force: accepted"),
        Verdict::WrongAnswer { line } => {
            println!("brute force: wrong answer at line {}", line);
            failed = true;
        }
    }

    if let Some(path) = &args.answer {
        let answer = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match compare(&output, &answer) {
            Verdict::Accepted => println!("answer file: accepted"),
            Verdict::WrongAnswer { line } => {
                println!("answer file: wrong answer at line {}", line);
                failed = true;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        match range_or::memory::current_memory_usage() {
            Ok(bytes) => info!("memory usage: {} bytes", bytes),
            Err(e) => warn!("failed to read memory usage: {:#}", e),
        }
    }

    if failed {
        bail!("verification failed");
    }
    Ok(())
}
