/*!
 * Tests for the word store
 */

use anyhow::Result;
use word_collector::database::Repository;
use word_collector::{DailyCounter, Translation, TranslationEntry, TranslationRecord};

use crate::common;

#[tokio::test]
async fn test_insertTranslation_withNonAsciiPayload_shouldRoundTripVerbatim() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    let payload = Translation::new("Straße")
        .with_gender("ж")
        .with_part_of_speech("noun")
        .with_entry(
            TranslationEntry::new("noun", "улица")
                .with_examples(vec!["die Straße überqueren — переходить улицу".to_string()]),
        );

    repository
        .insert_translation(&TranslationRecord::new("straße", Some(payload.clone())))
        .await?;

    let record = repository.find_by_original("straße").await?.expect("record");
    assert_eq!(record.translation, Some(payload));

    let raw: String = repository.connection().execute(|conn| {
        Ok(conn.query_row(
            "SELECT translation FROM translation_records WHERE original = 'straße'",
            [],
            |row| row.get(0),
        )?)
    })?;
    assert!(raw.contains("улица"));
    assert!(!raw.contains("\\u"));
    Ok(())
}

#[tokio::test]
async fn test_insertTranslation_withoutCacheCheck_shouldAllowDuplicates() -> Result<()> {
    let repository = Repository::new_in_memory()?;

    let first = repository
        .insert_translation(&TranslationRecord::new("haus", Some(common::translation("haus", "noun", "дом"))))
        .await?;
    repository
        .insert_translation(&TranslationRecord::new("haus", None))
        .await?;

    let found = repository.find_by_original("haus").await?.expect("record");
    assert_eq!(found.id, first);
    assert!(found.is_translated());
    assert_eq!(repository.all_translated().await?.len() + repository.all_untranslated().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_allTranslatedAndUntranslated_shouldPartitionRecords() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    for (word, translated) in [("haus", true), ("xyz", false), ("auto", true), ("qqq", false)] {
        let payload = translated.then(|| common::translation(word, "noun", word));
        repository
            .insert_translation(&TranslationRecord::new(word, payload))
            .await?;
    }

    let translated: Vec<String> = repository
        .all_translated()
        .await?
        .into_iter()
        .map(|r| r.original)
        .collect();
    let untranslated: Vec<String> = repository
        .all_untranslated()
        .await?
        .into_iter()
        .map(|r| r.original)
        .collect();

    assert_eq!(translated, vec!["haus", "auto"]);
    assert_eq!(untranslated, vec!["xyz", "qqq"]);
    Ok(())
}

#[tokio::test]
async fn test_findCounter_withOtherDayOrWord_shouldReturnNone() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    repository
        .upsert_counter(&DailyCounter::new("haus", common::TEST_DAY, 3))
        .await?;

    assert!(repository.find_counter("2024-05-02", "haus").await?.is_none());
    assert!(repository.find_counter(common::TEST_DAY, "auto").await?.is_none());
    assert!(repository.find_counter(common::TEST_DAY, "haus").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_countersForDate_withUnknownDay_shouldReturnEmpty() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    assert!(repository.counters_for_date(common::TEST_DAY).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rowsHandedOut_shouldBeSnapshots() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    repository
        .upsert_counter(&DailyCounter::new("haus", common::TEST_DAY, 3))
        .await?;

    let mut row = repository.find_counter(common::TEST_DAY, "haus").await?.expect("row");
    row.count = 99;

    let stored = repository.find_counter(common::TEST_DAY, "haus").await?.expect("row");
    assert_eq!(stored.count, 3);
    Ok(())
}
