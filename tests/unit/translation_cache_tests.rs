/*!
 * Tests for the persistent translation cache
 */

use anyhow::Result;
use word_collector::database::Repository;
use word_collector::providers::mock::MockDictionary;
use word_collector::{CollectorError, EnsureOutcome, TranslationCache, TranslationOutcome};

use crate::common;

fn create_cache(dictionary: MockDictionary) -> Result<TranslationCache<MockDictionary>> {
    Ok(TranslationCache::new(Repository::new_in_memory()?, dictionary))
}

#[tokio::test]
async fn test_ensureTranslated_repeatedManyTimes_shouldCallProviderOnce() -> Result<()> {
    common::init_test_logger();
    let cache = create_cache(common::german_dictionary())?;

    for _ in 0..5 {
        cache.ensure_translated("auto").await?;
    }

    assert_eq!(cache.dictionary().calls_for("auto"), 1);
    let stats = cache.repository().stats().await?;
    assert_eq!(stats.translated_words, 1);
    assert_eq!(stats.untranslated_words, 0);
    Ok(())
}

#[tokio::test]
async fn test_ensureTranslated_withProviderFailure_shouldRecordNullTranslation() -> Result<()> {
    let cache = create_cache(common::german_dictionary().failing_on("haus"))?;

    let outcome = cache.ensure_translated("haus").await?;

    assert!(matches!(outcome, EnsureOutcome::Recorded(TranslationOutcome::Failed(_))));
    let record = cache.repository().find_by_original("haus").await?.expect("record");
    assert!(record.translation.is_none());
    Ok(())
}

#[tokio::test]
async fn test_ensureTranslated_withNotFoundAndFailure_shouldPersistIdentically() -> Result<()> {
    let cache = create_cache(MockDictionary::new().failing_on("kaputt"))?;

    cache.ensure_translated("kaputt").await?;
    cache.ensure_translated("unbekannt").await?;

    let untranslated = cache.repository().all_untranslated().await?;
    assert_eq!(untranslated.len(), 2);
    assert!(untranslated.iter().all(|r| r.translation.is_none()));
    Ok(())
}

#[tokio::test]
async fn test_ensureTranslated_afterFailure_shouldNeverRetry() -> Result<()> {
    let cache = create_cache(common::german_dictionary().failing_on("brot"))?;

    cache.ensure_translated("brot").await?;
    let second = cache.ensure_translated("brot").await?;

    assert_eq!(second, EnsureOutcome::AlreadyKnown);
    assert_eq!(cache.dictionary().calls_for("brot"), 1);
    Ok(())
}

#[tokio::test]
async fn test_ensureTranslated_withDistinctWords_shouldCallProviderOncePerWord() -> Result<()> {
    let cache = create_cache(common::german_dictionary())?;

    for word in ["haus", "auto", "haus", "gehen", "auto", "haus"] {
        cache.ensure_translated(word).await?;
    }

    assert_eq!(cache.dictionary().call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_ensureTranslated_withEmptyWord_shouldRejectAsMalformedInput() -> Result<()> {
    let cache = create_cache(common::german_dictionary())?;

    let err = cache.ensure_translated("").await.unwrap_err();

    let collector_error = err.downcast_ref::<CollectorError>().expect("collector error");
    assert!(collector_error.is_malformed_input());
    assert_eq!(cache.dictionary().call_count(), 0);
    Ok(())
}
