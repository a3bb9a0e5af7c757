use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[display(
        fmt = "invalid range [{}, {}] for a sequence of length {}",
        low,
        high,
        len
    )]
    InvalidRange { low: usize, high: usize, len: usize },

    #[display(fmt = "failed to allocate a merge buffer for {} timestamps", requested)]
    ResourceExhaustion { requested: usize },
}
