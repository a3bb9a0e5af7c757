use super::{merge::merge_runs, topdown, MergeStats};
use crate::error::MergeError;

/// Below this many timestamps, spawning more work costs more than it saves.
const SEQUENTIAL_CUTOFF: usize = 4096;

pub(crate) fn sort(seq: &mut [i64], low: usize, high: usize) -> Result<MergeStats, MergeError> {
    if low >= high {
        return Ok(MergeStats::default());
    }
    sort_run(&mut seq[low..=high], SEQUENTIAL_CUTOFF)
}

fn sort_run(run: &mut [i64], cutoff: usize) -> Result<MergeStats, MergeError> {
    let len = run.len();
    if len < 2 {
        return Ok(MergeStats::default());
    }
    let high = len - 1;
    if len <= cutoff {
        return topdown::sort(run, 0, high);
    }

    // same split point as the sequential sort
    let mid = high / 2;
    let (left, right) = run.split_at_mut(mid + 1);
    let (left_stats, right_stats) =
        rayon::join(|| sort_run(left, cutoff), || sort_run(right, cutoff));

    let mut stats = left_stats?;
    stats += right_stats?;
    stats += merge_runs(run, 0, mid, high)?;

    Ok(stats)
}
