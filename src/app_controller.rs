use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fmt;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::counters::CounterAggregator;
use crate::database::{DatabaseConnection, Repository, StoreStats};
use crate::day;
use crate::harvest::{count_words, merge_counts, most_common, FeedClient, NewsSource, WordCounts};
use crate::language_utils;
use crate::providers::yandex::YandexDictionary;
use crate::providers::Dictionary;
use crate::ranking::{RankedWord, TopWordsRanker};
use crate::report;
use crate::translation::{EnsureOutcome, TranslationCache, TranslationOutcome};

// @module: Application controller for the daily word harvest

/// What a harvest did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Articles listed in the feed
    pub articles: usize,
    /// Articles that could not be fetched
    pub failed_articles: usize,
    /// Distinct words seen across all articles
    pub distinct_words: usize,
    /// Words processed (translated and counted)
    pub processed_words: usize,
    /// Words looked up and found in the dictionary
    pub newly_translated: usize,
    /// Words looked up without a result
    pub newly_untranslated: usize,
    /// Words already in the store before this run
    pub already_known: usize,
}

impl fmt::Display for HarvestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} article(s) ({} failed), {} distinct word(s), {} processed: {} translated, {} without translation, {} already known",
            self.articles,
            self.failed_articles,
            self.distinct_words,
            self.processed_words,
            self.newly_translated,
            self.newly_untranslated,
            self.already_known
        )
    }
}

/// Main application controller for the word harvest
pub struct Controller<D: Dictionary, S: NewsSource> {
    // @field: App configuration
    config: Config,
    // @field: Word store
    repository: Repository,
    // @field: One-shot dictionary lookups
    cache: TranslationCache<D>,
    // @field: Daily counts
    counters: CounterAggregator,
    // @field: Daily ranking
    ranker: TopWordsRanker,
    // @field: Article source
    source: S,
}

impl Controller<YandexDictionary, FeedClient> {
    // @method: Create a controller talking to the configured feed and dictionary
    pub fn with_config(config: Config) -> Result<Self> {
        let repository = open_repository(&config)?;

        let lang = language_utils::language_pair(
            &config.dictionary.source_language,
            &config.dictionary.target_language,
        )?;
        let dictionary = YandexDictionary::new(
            config.dictionary.api_key.clone(),
            config.dictionary.endpoint.clone(),
            lang,
            config.dictionary.timeout_secs,
        );
        let source = FeedClient::new(config.feed.timeout_secs, &config.feed.article_selector)?;

        Ok(Self::new(config, repository, dictionary, source))
    }
}

/// Open the word store named by the configuration
pub fn open_repository(config: &Config) -> Result<Repository> {
    let path = config.store_path()?;
    Ok(Repository::new(DatabaseConnection::new(&path)?))
}

impl<D: Dictionary, S: NewsSource> Controller<D, S> {
    // @method: Create a controller from its parts
    pub fn new(config: Config, repository: Repository, dictionary: D, source: S) -> Self {
        Self {
            cache: TranslationCache::new(repository.clone(), dictionary),
            counters: CounterAggregator::new(repository.clone()),
            ranker: TopWordsRanker::new(repository.clone()),
            repository,
            config,
            source,
        }
    }

    /// Word store used by this controller
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Dictionary used by this controller
    pub fn dictionary(&self) -> &D {
        self.cache.dictionary()
    }

    /// Harvest today's words, rank them and write the report
    pub async fn run(&self) -> Result<PathBuf> {
        let today = day::today();

        let summary = self.harvest(&today).await?;
        info!("Harvest for {}: {}", today, summary);

        let category = self.config.report_category();
        let top = self.top(&today, category, self.config.report.limit).await?;

        let output_path = PathBuf::from(&self.config.report.output_path);
        report::write_report(&output_path, &today, category, &top)?;

        Ok(output_path)
    }

    /// Collect words from every article of the feed and record them for `day`
    pub async fn harvest(&self, day: &str) -> Result<HarvestSummary> {
        let day = day::parse_day(day)?;
        let mut summary = HarvestSummary::default();

        let urls = self
            .source
            .list_article_urls(&self.config.feed.url)
            .await
            .with_context(|| format!("Failed to list articles of {}", self.config.feed.url))?;
        summary.articles = urls.len();

        let mut totals = WordCounts::new();
        for url in &urls {
            match self.source.article_lines(url).await {
                Ok(lines) => {
                    info!("Got {} lines for {}", lines.len(), url);
                    let counts = count_words(&lines);
                    debug!("Got {} unique words for {}", counts.len(), url);
                    merge_counts(&mut totals, counts);
                }
                Err(e) => {
                    warn!("Skipping article {}: {:#}", url, e);
                    summary.failed_articles += 1;
                }
            }
        }
        summary.distinct_words = totals.len();

        let top_words = most_common(&totals, self.config.feed.words_per_run);

        let progress_bar = ProgressBar::new(top_words.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} words ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        for (word, count) in top_words {
            progress_bar.set_message(word.clone());

            match self.cache.ensure_translated(&word).await? {
                EnsureOutcome::AlreadyKnown => summary.already_known += 1,
                EnsureOutcome::Recorded(TranslationOutcome::Found(_)) => summary.newly_translated += 1,
                EnsureOutcome::Recorded(_) => summary.newly_untranslated += 1,
            }
            self.counters.record_count(&word, &day, count).await?;

            summary.processed_words += 1;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        Ok(summary)
    }

    /// Ranking of a day straight from the store
    pub async fn top(
        &self,
        day: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RankedWord>> {
        self.ranker.top_words(day, category, limit).await
    }

    /// Store statistics
    pub async fn stats(&self) -> Result<StoreStats> {
        self.repository.stats().await
    }
}
