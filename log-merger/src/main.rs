use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use log::debug;
use log_merger::{merge_logs, Strategy};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    debug!("{args:?}");

    let stdout = io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            merge_logs(BufReader::new(file), stdout, args.strategy, args.quiet)?;
        }
        None => {
            merge_logs(io::stdin().lock(), stdout, args.strategy, args.quiet)?;
        }
    }

    Ok(())
}

/// Merges timestamps from several server logs and sorts them with merge sort.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// topdown, bottomup or parallel
    #[arg(short, long, default_value_t = Strategy::TopDown)]
    strategy: Strategy,
    /// Replay the answers to the prompts from a file, exactly as they would be typed on stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Only print the combined and sorted timestamps
    #[arg(short, long)]
    quiet: bool,
}
