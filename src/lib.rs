/*!
 * # word-collector
 *
 * A Rust library that learns vocabulary from the news: it harvests the
 * articles of an RSS feed, counts their words, looks the most frequent ones
 * up in a dictionary and keeps both translations and daily counts in a
 * persistent store, so repeated runs only do new work.
 *
 * ## Features
 *
 * - RSS feed and article harvesting
 * - Word counting tuned for German news text
 * - One dictionary lookup per word, ever (Yandex Dictionary)
 * - Daily counters with last-write-wins upserts
 * - Deterministic daily top-words ranking with a category filter
 * - Markdown reports
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `database`: SQLite word store (translation records, daily counters)
 * - `translation`: persistent translation cache
 * - `counters`: daily counter aggregation
 * - `ranking`: daily top-words ranking
 * - `providers`: dictionary clients:
 *   - `providers::yandex`: Yandex Dictionary API client
 *   - `providers::mock`: scripted dictionary for tests
 * - `harvest`: feed fetching and tokenizing
 * - `report`: Markdown report rendering
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod counters;
pub mod database;
pub mod day;
pub mod errors;
pub mod file_utils;
pub mod harvest;
pub mod language_utils;
pub mod providers;
pub mod ranking;
pub mod report;
pub mod translation;
pub mod words;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use counters::CounterAggregator;
pub use database::{DailyCounter, Repository, Translation, TranslationEntry, TranslationRecord};
pub use errors::{CollectorError, ProviderError};
pub use providers::Dictionary;
pub use ranking::{RankedWord, TopWordsRanker, DEFAULT_LIMIT};
pub use translation::{EnsureOutcome, TranslationCache, TranslationOutcome};
