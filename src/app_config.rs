use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::database::DatabaseConnection;
use crate::file_utils::FileManager;
use crate::harvest::feed::DEFAULT_ARTICLE_SELECTOR;
use crate::providers::yandex::DEFAULT_ENDPOINT;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Word store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// News feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Dictionary provider settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Word store configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StoreConfig {
    // @field: Database file; empty selects the user data directory
    #[serde(default = "String::new")]
    pub path: String,
}

/// News feed configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FeedConfig {
    // @field: RSS feed listing the articles
    #[serde(default = "default_feed_url")]
    pub url: String,

    // @field: CSS selector of the article body
    #[serde(default = "default_article_selector")]
    pub article_selector: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Most frequent words translated and counted per run
    #[serde(default = "default_words_per_run")]
    pub words_per_run: usize,
}

/// Dictionary provider configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DictionaryConfig {
    // @field: Service URL
    #[serde(default = "default_dictionary_endpoint")]
    pub endpoint: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Language of the harvested articles (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    // @field: Language of the translations (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Report configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    // @field: Grammatical category to rank; none ranks every word
    #[serde(default = "default_report_category")]
    pub category: Option<String>,

    // @field: Number of ranked words
    #[serde(default = "default_report_limit")]
    pub limit: usize,

    // @field: Output file
    #[serde(default = "default_report_path")]
    pub output_path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            article_selector: default_article_selector(),
            timeout_secs: default_timeout_secs(),
            words_per_run: default_words_per_run(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_dictionary_endpoint(),
            api_key: String::new(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            category: default_report_category(),
            limit: default_report_limit(),
            output_path: default_report_path(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_feed_url() -> String {
    "http://www.spiegel.de/schlagzeilen/tops/index.rss".to_string()
}

fn default_article_selector() -> String {
    DEFAULT_ARTICLE_SELECTOR.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_words_per_run() -> usize {
    100
}

fn default_dictionary_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_source_language() -> String {
    "de".to_string()
}

fn default_target_language() -> String {
    "ru".to_string()
}

fn default_report_category() -> Option<String> {
    Some("noun".to_string())
}

fn default_report_limit() -> usize {
    crate::ranking::DEFAULT_LIMIT
}

fn default_report_path() -> String {
    "top_words.md".to_string()
}

impl Config {
    /// Load the configuration, writing a default file when none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if FileManager::file_exists(path) {
            let content = FileManager::read_to_string(path)?;
            return serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path));
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(path, &config_json)?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.dictionary.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.dictionary.target_language)?;

        if self.feed.url.trim().is_empty() {
            return Err(anyhow!("Feed URL is required"));
        }

        if self.feed.words_per_run == 0 {
            return Err(anyhow!("Words per run must be greater than zero"));
        }

        if self.dictionary.api_key.trim().is_empty() {
            return Err(anyhow!("Dictionary API key is required"));
        }

        if self.report.limit == 0 {
            return Err(anyhow!("Report limit must be greater than zero"));
        }

        Ok(())
    }

    /// Database file to open
    pub fn store_path(&self) -> Result<PathBuf> {
        if self.store.path.trim().is_empty() {
            DatabaseConnection::default_database_path()
        } else {
            Ok(PathBuf::from(&self.store.path))
        }
    }

    /// Category filter of the report, treating an empty string as none
    pub fn report_category(&self) -> Option<&str> {
        self.report.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreConfig::default(),
            feed: FeedConfig::default(),
            dictionary: DictionaryConfig::default(),
            report: ReportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
