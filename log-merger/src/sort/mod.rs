use std::{ops::AddAssign, str::FromStr};

use derive_more::Display;
use log::debug;

use crate::error::MergeError;

mod bottomup;
mod merge;
mod parallel;
mod topdown;

pub use merge::merge;

/// How the range gets split up. Every strategy produces the same ordering.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    #[display(fmt = "topdown")]
    TopDown,
    #[display(fmt = "bottomup")]
    BottomUp,
    #[display(fmt = "parallel")]
    Parallel,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "topdown" => Ok(Strategy::TopDown),
            "bottomup" => Ok(Strategy::BottomUp),
            "parallel" => Ok(Strategy::Parallel),
            _ => Err(format!(
                "unknown strategy {name}, expected one of topdown, bottomup, parallel"
            )),
        }
    }
}

/// Work counters collected while sorting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub comparisons: usize,
    pub writes: usize,
    pub merges: usize,
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.comparisons += other.comparisons;
        self.writes += other.writes;
        self.merges += other.merges;
    }
}

/// Sorts `seq[low..=high]` ascending, in place.
///
/// A range with `low >= high` is already sorted and is left alone. A `high`
/// past the end of `seq` is rejected before anything moves.
pub fn sort(seq: &mut [i64], low: usize, high: usize) -> Result<(), MergeError> {
    sort_with(seq, low, high, Strategy::TopDown).map(|_| ())
}

pub fn sort_with(
    seq: &mut [i64],
    low: usize,
    high: usize,
    strategy: Strategy,
) -> Result<MergeStats, MergeError> {
    if high >= seq.len() {
        return Err(MergeError::InvalidRange {
            low,
            high,
            len: seq.len(),
        });
    }

    let stats = match strategy {
        Strategy::TopDown => topdown::sort(seq, low, high),
        Strategy::BottomUp => bottomup::sort(seq, low, high),
        Strategy::Parallel => parallel::sort(seq, low, high),
    }?;

    debug!("sorted [{low}, {high}] with {strategy}: {stats:?}");

    Ok(stats)
}

/// Sorts the whole sequence. An empty sequence is a no-op.
pub fn sort_all(seq: &mut [i64], strategy: Strategy) -> Result<MergeStats, MergeError> {
    match seq.len() {
        0 => Ok(MergeStats::default()),
        len => sort_with(seq, 0, len - 1, strategy),
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::{sort, sort_all, sort_with, MergeStats, Strategy};
    use crate::error::MergeError;

    #[rstest]
    #[case(vec![5, 2, 9, 1, 5, 6], vec![1, 2, 5, 5, 6, 9])]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![4, 4, 4, 4], vec![4, 4, 4, 4])]
    #[case(vec![9, 7, 5, 3, 1], vec![1, 3, 5, 7, 9])]
    #[case(vec![42], vec![42])]
    #[case(vec![], vec![])]
    #[case(vec![-3, 0, -10, 3], vec![-10, -3, 0, 3])]
    fn test_sort_all(
        #[case] mut input: Vec<i64>,
        #[case] expected: Vec<i64>,
        #[values(Strategy::TopDown, Strategy::BottomUp, Strategy::Parallel)] strategy: Strategy,
    ) {
        sort_all(&mut input, strategy).unwrap();
        assert_eq!(input, expected);
    }

    #[test]
    fn test_sort_is_a_no_op_when_low_reaches_high() {
        let mut input = vec![3, 2, 1];
        sort(&mut input, 1, 1).unwrap();
        sort(&mut input, 2, 0).unwrap();
        assert_eq!(input, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_leaves_elements_outside_the_range() {
        let mut input = vec![9, 8, 3, 1, 2, 0];
        sort(&mut input, 2, 4).unwrap();
        assert_eq!(input, vec![9, 8, 1, 2, 3, 0]);
    }

    #[rstest]
    fn test_sort_rejects_a_range_past_the_end(
        #[values(Strategy::TopDown, Strategy::BottomUp, Strategy::Parallel)] strategy: Strategy,
    ) {
        let mut input = vec![2, 1];
        let result = sort_with(&mut input, 0, 2, strategy);
        assert_eq!(
            result,
            Err(MergeError::InvalidRange {
                low: 0,
                high: 2,
                len: 2
            })
        );
        assert_eq!(input, vec![2, 1]);
    }

    #[rstest]
    fn test_buffer_exhaustion_propagates_out_of_the_sort(
        #[values(Strategy::TopDown, Strategy::BottomUp, Strategy::Parallel)] strategy: Strategy,
    ) {
        // single element buffers still fit, so the first two element run fails
        super::merge::MAX_BUFFER_LEN.with(|max| max.set(1));
        let mut input = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let result = sort_all(&mut input, strategy);
        super::merge::MAX_BUFFER_LEN.with(|max| max.set(usize::MAX));

        assert_eq!(result, Err(MergeError::ResourceExhaustion { requested: 2 }));
    }

    #[test]
    fn test_sort_all_on_empty_does_no_work() {
        let stats = sort_all(&mut [], Strategy::TopDown).unwrap();
        assert_eq!(stats, MergeStats::default());
    }

    #[test]
    fn test_strategies_agree_on_random_input() {
        let mut rng = StdRng::seed_from_u64(2922);
        for len in [2, 10, 127, 1000, 10_000] {
            let input = (0..len)
                .map(|_| rng.gen_range(-50..50))
                .collect::<Vec<i64>>();
            let mut expected = input.clone();
            expected.sort();

            for strategy in [Strategy::TopDown, Strategy::BottomUp, Strategy::Parallel] {
                let mut actual = input.clone();
                sort_all(&mut actual, strategy).unwrap();
                assert_eq!(actual, expected, "{strategy} with {len} timestamps");
            }
        }
    }

    #[rstest]
    #[case("topdown", Strategy::TopDown)]
    #[case("bottomup", Strategy::BottomUp)]
    #[case("parallel", Strategy::Parallel)]
    fn test_strategy_names_round_trip(#[case] name: &str, #[case] strategy: Strategy) {
        assert_eq!(name.parse::<Strategy>(), Ok(strategy));
        assert_eq!(strategy.to_string(), name);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!("quicksort".parse::<Strategy>().is_err());
    }
}
