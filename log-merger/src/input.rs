use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use anyhow::{anyhow, bail, Context};
use log::debug;

use crate::{output::write_to_output, sources::LogSource};

const INVALID_SERVERS: &str = "Invalid number of servers.";
const INVALID_ENTRY_COUNT: &str = "Invalid entry count.";

/// Splits a reader into whitespace separated tokens, reading one line at a
/// time so that interactive input is consumed as it is typed.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read input")?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(ToString::to_string));
        }
    }
}

/// Prompts for servers and their log entries and reads them back.
pub struct Collector<R, W> {
    tokens: TokenReader<R>,
    prompts: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(reader: R, prompts: W, quiet: bool) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            prompts,
            quiet,
        }
    }

    /// Asks for every server's entry count first, then for the timestamps of
    /// each server that has any.
    pub fn collect_sources(&mut self) -> anyhow::Result<Vec<LogSource>> {
        self.prompt("=== Merge Sort Log Merger ===\n")?;
        self.prompt("Enter number of servers (log files): ")?;
        let num_servers = self
            .next_count()?
            .filter(|servers| *servers > 0)
            .ok_or_else(|| anyhow!(INVALID_SERVERS))?;

        let mut entries_per_server = Vec::new();
        for server in 1..=num_servers {
            self.prompt(&format!("\nServer {server}:\n"))?;
            self.prompt("  Enter number of log entries for this server: ")?;
            let entries = self
                .next_count()?
                .ok_or_else(|| anyhow!(INVALID_ENTRY_COUNT))?;
            entries_per_server.push(entries);
        }

        let mut sources = Vec::new();
        for (index, entries) in entries_per_server.into_iter().enumerate() {
            let server = index + 1;
            if entries > 0 {
                self.prompt(&format!(
                    "  Enter {entries} timestamps for server {server} (space-separated): "
                ))?;
            }
            let source = LogSource::new(server, self.read_timestamps(server, entries)?);
            debug!(
                "server {} contributed {} timestamps",
                source.server,
                source.len()
            );
            sources.push(source);
        }

        Ok(sources)
    }

    fn read_timestamps(&mut self, server: usize, entries: usize) -> anyhow::Result<Vec<i64>> {
        let mut timestamps = Vec::new();
        while timestamps.len() < entries {
            let Some(token) = self.tokens.next_token()? else {
                bail!(
                    "Expected {entries} timestamps for server {server}, but the input ended after {}",
                    timestamps.len()
                );
            };
            let timestamp = token
                .parse::<i64>()
                .with_context(|| format!("Invalid timestamp {token:?} for server {server}"))?;
            timestamps.push(timestamp);
        }
        Ok(timestamps)
    }

    /// A missing, negative or non numeric count reads as `None`.
    fn next_count(&mut self) -> anyhow::Result<Option<usize>> {
        Ok(self
            .tokens
            .next_token()?
            .and_then(|token| token.parse::<usize>().ok()))
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_to_output(&mut self.prompts, text.as_bytes()).context("Failed to write prompt")
    }
}
