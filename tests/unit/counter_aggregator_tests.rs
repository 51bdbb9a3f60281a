/*!
 * Tests for daily counter aggregation
 */

use anyhow::Result;
use word_collector::database::Repository;
use word_collector::{CollectorError, CounterAggregator};

use crate::common;

#[tokio::test]
async fn test_recordCount_lastWriteWins_shouldNotSum() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    let aggregator = CounterAggregator::new(repository.clone());

    aggregator.record_count("auto", common::TEST_DAY, 9).await?;
    aggregator.record_count("auto", common::TEST_DAY, 4).await?;

    let rows = repository.counters_for_date(common::TEST_DAY).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].original, "auto");
    assert_eq!(rows[0].count, 4);
    Ok(())
}

#[tokio::test]
async fn test_recordCount_onDifferentDays_shouldKeepOneRowPerDay() -> Result<()> {
    let repository = Repository::new_in_memory()?;
    let aggregator = CounterAggregator::new(repository.clone());

    aggregator.record_count("auto", "2024-05-01", 9).await?;
    aggregator.record_count("auto", "2024-05-02", 2).await?;

    assert_eq!(repository.find_counter("2024-05-01", "auto").await?.map(|c| c.count), Some(9));
    assert_eq!(repository.find_counter("2024-05-02", "auto").await?.map(|c| c.count), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_recordCount_withNonCanonicalDay_shouldReject() -> Result<()> {
    let aggregator = CounterAggregator::new(Repository::new_in_memory()?);

    for day in ["01/05/2024", "2024-5-1", "2024-05-01 12:00"] {
        let err = aggregator.record_count("auto", day, 1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectorError>(),
            Some(CollectorError::InvalidDate(_))
        ));
    }
    Ok(())
}
