use super::{merge::merge_runs, MergeStats};
use crate::error::MergeError;

pub(crate) fn sort(seq: &mut [i64], low: usize, high: usize) -> Result<MergeStats, MergeError> {
    if low >= high {
        return Ok(MergeStats::default());
    }

    let mid = low + (high - low) / 2;
    let mut stats = sort(seq, low, mid)?;
    stats += sort(seq, mid + 1, high)?;
    stats += merge_runs(seq, low, mid, high)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    #[case(vec![5, 2, 4, 6, 1, 3], vec![1, 2, 3, 4, 5, 6])]
    #[case(vec![2, 1], vec![1, 2])]
    #[case(vec![0, -1, i64::MAX, i64::MIN], vec![i64::MIN, -1, 0, i64::MAX])]
    fn test_sorts_the_whole_range(#[case] mut input: Vec<i64>, #[case] expected: Vec<i64>) {
        let high = input.len() - 1;
        super::sort(&mut input, 0, high).unwrap();
        assert_eq!(input, expected);
    }

    #[test]
    fn test_performs_one_merge_per_internal_node() {
        // a range of n elements splits into n - 1 merges
        let mut input = vec![8, 7, 6, 5, 4, 3, 2];
        let stats = super::sort(&mut input, 0, 6).unwrap();
        assert_eq!(stats.merges, 6);
    }
}
