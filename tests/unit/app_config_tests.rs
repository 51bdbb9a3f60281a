/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use word_collector::app_config::{Config, LogLevel};

use crate::common;

#[test]
fn test_default_shouldHarvestGermanNewsIntoRussian() {
    let config = Config::default();

    assert_eq!(config.dictionary.source_language, "de");
    assert_eq!(config.dictionary.target_language, "ru");
    assert!(config.feed.url.ends_with("index.rss"));
    assert_eq!(config.report.limit, word_collector::DEFAULT_LIMIT);
    assert_eq!(config.report_category(), Some("noun"));
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_loadOrCreate_withExistingFile_shouldReadIt() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");
    std::fs::write(
        &path,
        r#"{
            "store": {"path": "/tmp/words.db"},
            "dictionary": {"api_key": "k", "source_language": "deu"},
            "report": {"category": null, "limit": 25}
        }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.store.path, "/tmp/words.db");
    assert_eq!(config.report.limit, 25);
    assert_eq!(config.report_category(), None);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_validate_withEmptyFeedUrl_shouldFail() {
    let mut config = Config::default();
    config.dictionary.api_key = "k".to_string();
    config.feed.url = "  ".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_logLevel_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
