use std::io::{BufRead, Write};

use anyhow::Context;
use log::{info, warn};

pub mod error;
pub mod input;
pub mod output;
pub mod sort;
pub mod sources;

pub use error::MergeError;
pub use sort::Strategy;

use input::Collector;
use output::write_to_output;

/// Collects timestamps from every server, then writes the combined list
/// before and after sorting it. Returns the sorted timestamps.
pub fn merge_logs<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    strategy: Strategy,
    quiet: bool,
) -> anyhow::Result<Vec<i64>> {
    let sources = Collector::new(reader, &mut out, quiet).collect_sources()?;
    let silent = sources::silent_servers(&sources);
    if !silent.is_empty() {
        warn!("no log entries from servers {silent:?}");
    }
    let mut timestamps = sources::combine(&sources);
    info!(
        "combined {} timestamps from {} servers",
        timestamps.len(),
        sources.len()
    );

    let unsorted = format!(
        "\nCombined timestamps from all servers (unsorted):\n{}\n",
        sources::format_timestamps(&timestamps)
    );
    write_to_output(&mut out, unsorted.as_bytes())?;

    sort::sort_all(&mut timestamps, strategy).context("Failed to sort timestamps")?;

    let sorted = format!(
        "\nMerged & sorted timestamps (across all servers):\n{}\n",
        sources::format_timestamps(&timestamps)
    );
    write_to_output(&mut out, sorted.as_bytes())?;

    Ok(timestamps)
}
