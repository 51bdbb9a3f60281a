/*!
 * Tests for the daily top-words ranking
 */

use anyhow::Result;
use word_collector::database::Repository;
use word_collector::{DailyCounter, TopWordsRanker, TranslationRecord, DEFAULT_LIMIT};

use crate::common::{self, TEST_DAY};

fn words(ranked: &[word_collector::RankedWord]) -> Vec<String> {
    ranked.iter().map(|entry| entry.word.clone()).collect()
}

#[tokio::test]
async fn test_topWords_withLimitTwo_shouldReturnAutoThenHaus() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(
        &repository,
        TEST_DAY,
        &[("haus", "noun", 5), ("auto", "noun", 9), ("brot", "noun", 3)],
    )
    .await?;

    let ranked = TopWordsRanker::new(repository).top_words(TEST_DAY, None, 2).await?;

    assert_eq!(words(&ranked), vec!["auto", "haus"]);
    Ok(())
}

#[tokio::test]
async fn test_topWords_withNounCategory_shouldExcludeMoreFrequentVerb() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(&repository, TEST_DAY, &[("haus", "noun", 5), ("gehen", "verb", 12)]).await?;

    let ranked = TopWordsRanker::new(repository)
        .top_words(TEST_DAY, Some("noun"), DEFAULT_LIMIT)
        .await?;

    assert_eq!(words(&ranked), vec!["haus"]);
    Ok(())
}

#[tokio::test]
async fn test_topWords_withThreeQualifyingWords_shouldReturnExactlyThree() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(
        &repository,
        TEST_DAY,
        &[("haus", "noun", 5), ("auto", "noun", 9), ("brot", "noun", 3)],
    )
    .await?;

    let ranked = TopWordsRanker::new(repository).top_words(TEST_DAY, None, 10).await?;

    assert_eq!(ranked.len(), 3);
    assert_eq!(
        ranked.iter().map(|r| r.count).collect::<Vec<_>>(),
        vec![9, 5, 3]
    );
    Ok(())
}

#[tokio::test]
async fn test_topWords_withUncountedOrNullTranslation_shouldExclude() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(&repository, TEST_DAY, &[("haus", "noun", 5)]).await?;
    // Counted but never looked up
    repository
        .upsert_counter(&DailyCounter::new("nie", TEST_DAY, 100))
        .await?;
    // Looked up without result
    repository
        .insert_translation(&TranslationRecord::new("nichts", None))
        .await?;
    repository
        .upsert_counter(&DailyCounter::new("nichts", TEST_DAY, 80))
        .await?;

    let ranked = TopWordsRanker::new(repository).top_words(TEST_DAY, None, 10).await?;

    assert_eq!(words(&ranked), vec!["haus"]);
    Ok(())
}

#[tokio::test]
async fn test_topWords_withOtherDayCounters_shouldIgnoreThem() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(&repository, TEST_DAY, &[("haus", "noun", 5)]).await?;
    repository
        .upsert_counter(&DailyCounter::new("haus", "2024-05-02", 50))
        .await?;

    let ranked = TopWordsRanker::new(repository).top_words(TEST_DAY, None, 10).await?;

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].count, 5);
    Ok(())
}

#[tokio::test]
async fn test_topWords_calledRepeatedly_shouldBeDeterministic() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(
        &repository,
        TEST_DAY,
        &[("zeit", "noun", 7), ("jahr", "noun", 7), ("land", "noun", 7), ("welt", "noun", 2)],
    )
    .await?;
    let ranker = TopWordsRanker::new(repository);

    let first = ranker.top_words(TEST_DAY, None, 10).await?;
    let second = ranker.top_words(TEST_DAY, None, 10).await?;

    assert_eq!(first, second);
    assert_eq!(words(&first), vec!["jahr", "land", "zeit", "welt"]);
    Ok(())
}

#[tokio::test]
async fn test_topWords_withCategoryAndLimit_shouldLimitAfterFiltering() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    common::seed_translated(
        &repository,
        TEST_DAY,
        &[
            ("gehen", "verb", 30),
            ("kommen", "verb", 25),
            ("haus", "noun", 10),
            ("auto", "noun", 8),
            ("brot", "noun", 1),
        ],
    )
    .await?;

    let ranked = TopWordsRanker::new(repository)
        .top_words(TEST_DAY, Some("noun"), 2)
        .await?;

    assert_eq!(words(&ranked), vec!["haus", "auto"]);
    Ok(())
}
