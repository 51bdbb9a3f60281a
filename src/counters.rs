//! Daily word counts.

use anyhow::Result;
use log::debug;

use crate::database::{DailyCounter, Repository};
use crate::day::parse_day;
use crate::words::normalize_word;

/// Writes per-day word totals into the word store
#[derive(Clone)]
pub struct CounterAggregator {
    repository: Repository,
}

impl CounterAggregator {
    /// Create an aggregator over a repository
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record the total occurrences of `word` on `date`
    ///
    /// `count` replaces any count already stored for the same word and day;
    /// it is never added to it.
    pub async fn record_count(&self, word: &str, date: &str, count: u32) -> Result<()> {
        let word = normalize_word(word)?;
        let date = parse_day(date)?;

        debug!("Recording {} occurrence(s) of '{}' on {}", count, word, date);
        self.repository
            .upsert_counter(&DailyCounter::new(word, date, count))
            .await
    }
}
