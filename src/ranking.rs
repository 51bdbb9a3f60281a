/*!
 * Daily top-words ranking.
 *
 * Joins the counters of one day with the stored translations. Words that
 * were never translated are left out whatever their count. The result is
 * ordered by count, highest first, with ties broken by the word itself so
 * that the same store always yields the same ranking.
 */

use anyhow::Result;
use log::debug;
use std::cmp::Ordering;

use crate::database::{Repository, Translation};
use crate::day::parse_day;

/// Number of words returned when no limit is given
pub const DEFAULT_LIMIT: usize = 10;

/// One entry of a ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    /// Normalized word
    pub word: String,
    /// Stored dictionary payload
    pub translation: Translation,
    /// Occurrences on the ranked day
    pub count: u32,
}

impl RankedWord {
    /// Grammatical category used by the category filter
    pub fn category(&self) -> Option<&str> {
        self.translation.primary_category()
    }
}

/// Order by count descending, then word ascending
pub fn compare_ranked(a: &RankedWord, b: &RankedWord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Reads rankings out of the word store
#[derive(Clone)]
pub struct TopWordsRanker {
    repository: Repository,
}

impl TopWordsRanker {
    /// Create a ranker over a repository
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most frequent translated words of `date`
    ///
    /// `category` keeps only words whose first translation sense has that
    /// type. Fewer than `limit` entries are returned when fewer qualify.
    pub async fn top_words(
        &self,
        date: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RankedWord>> {
        let date = parse_day(date)?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let counters = self.repository.counters_for_date(&date).await?;
        let total_rows = counters.len();

        let mut ranked = Vec::with_capacity(total_rows);
        for counter in counters {
            let translation = self
                .repository
                .find_by_original(&counter.original)
                .await?
                .and_then(|record| record.translation);

            if let Some(translation) = translation {
                ranked.push(RankedWord {
                    word: counter.original,
                    translation,
                    count: counter.count,
                });
            }
        }

        ranked.sort_by(compare_ranked);

        if let Some(category) = category {
            ranked.retain(|entry| entry.category() == Some(category));
        }
        ranked.truncate(limit);

        debug!(
            "Ranked {} of {} counted word(s) for {} (category: {})",
            ranked.len(),
            total_rows,
            date,
            category.unwrap_or("any")
        );

        Ok(ranked)
    }
}
