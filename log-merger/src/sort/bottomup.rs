use super::{merge::merge_runs, MergeStats};
use crate::error::MergeError;

/// Merges runs of width 1, 2, 4, ... across `seq[low..=high]` until a single
/// run remains. The last run of a pass may be shorter than `width`.
pub(crate) fn sort(seq: &mut [i64], low: usize, high: usize) -> Result<MergeStats, MergeError> {
    let mut stats = MergeStats::default();
    if low >= high {
        return Ok(stats);
    }

    let len = high - low + 1;
    let mut width = 1;
    while width < len {
        let mut start = low;
        // a pair needs at least one element in its right run
        while start + width <= high {
            let mid = start + width - 1;
            let end = high.min(mid + width);
            stats += merge_runs(seq, start, mid, end)?;
            start = end + 1;
        }
        width *= 2;
    }

    Ok(stats)
}
