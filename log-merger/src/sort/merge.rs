use log::trace;

use super::MergeStats;
use crate::error::MergeError;

/// Merges the sorted runs `seq[low..=mid]` and `seq[mid + 1..=high]` into a
/// single sorted run `seq[low..=high]`.
pub fn merge(
    seq: &mut [i64],
    low: usize,
    mid: usize,
    high: usize,
) -> Result<MergeStats, MergeError> {
    if low > mid || mid > high || high >= seq.len() {
        return Err(MergeError::InvalidRange {
            low,
            high,
            len: seq.len(),
        });
    }
    merge_runs(seq, low, mid, high)
}

pub(crate) fn merge_runs(
    seq: &mut [i64],
    low: usize,
    mid: usize,
    high: usize,
) -> Result<MergeStats, MergeError> {
    let left = buffer_from(&seq[low..=mid])?;
    let right = buffer_from(&seq[mid + 1..=high])?;

    let mut stats = MergeStats {
        merges: 1,
        ..MergeStats::default()
    };
    let (mut i, mut j) = (0, 0);
    let mut k = low;

    while i < left.len() && j < right.len() {
        stats.comparisons += 1;
        // ties take from the left run, which keeps equal keys in input order
        if left[i] <= right[j] {
            seq[k] = left[i];
            i += 1;
        } else {
            seq[k] = right[j];
            j += 1;
        }
        k += 1;
        stats.writes += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        seq[k] = value;
        k += 1;
        stats.writes += 1;
    }

    trace!(
        "merged [{low}, {mid}] with [{}, {high}] using {} comparisons",
        mid + 1,
        stats.comparisons
    );

    Ok(stats)
}

fn buffer_from(values: &[i64]) -> Result<Vec<i64>, MergeError> {
    let exhausted = MergeError::ResourceExhaustion {
        requested: values.len(),
    };
    if !within_buffer_limit(values.len()) {
        return Err(exhausted);
    }

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(values.len())
        .map_err(|_| exhausted)?;
    buffer.extend_from_slice(values);
    Ok(buffer)
}

#[cfg(not(test))]
fn within_buffer_limit(_len: usize) -> bool {
    true
}

// Tests cap the buffer size per thread to make allocation failures reachable.
#[cfg(test)]
thread_local! {
    pub(crate) static MAX_BUFFER_LEN: std::cell::Cell<usize> = std::cell::Cell::new(usize::MAX);
}

#[cfg(test)]
fn within_buffer_limit(len: usize) -> bool {
    MAX_BUFFER_LEN.with(|max| len <= max.get())
}
