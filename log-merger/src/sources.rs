use itertools::Itertools;

/// The timestamps read from one server's log, in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    /// 1-based position in the order the servers were entered.
    pub server: usize,
    pub timestamps: Vec<i64>,
}

impl LogSource {
    pub fn new(server: usize, timestamps: Vec<i64>) -> Self {
        Self { server, timestamps }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Concatenates every source's timestamps, keeping source order and the
/// order within each source.
pub fn combine(sources: &[LogSource]) -> Vec<i64> {
    sources
        .iter()
        .flat_map(|source| source.timestamps.iter().copied())
        .collect_vec()
}

/// Servers that were given zero log entries.
pub fn silent_servers(sources: &[LogSource]) -> Vec<usize> {
    sources
        .iter()
        .filter(|source| source.is_empty())
        .map(|source| source.server)
        .collect_vec()
}

pub fn format_timestamps(timestamps: &[i64]) -> String {
    timestamps.iter().join(" ")
}
