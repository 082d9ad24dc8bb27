use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::quotes_errors::{QuoteError, Result};
use super::quotes_model::{DailyQuotes, Quote};
use super::quotes_traits::QuoteStore;

/// Concurrency-safe in-process backend, used for tests and lightweight
/// deployments.
///
/// One coarse lock guards the whole nested structure: a bucket write is
/// atomic with respect to readers, at the cost of serializing every
/// caller for the bucket's duration. The lock is never held across I/O.
#[derive(Default)]
pub struct MemoryQuoteStore {
    days: RwLock<HashMap<NaiveDate, HashMap<String, Quote>>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn bulk_upsert(&self, day: &DailyQuotes) -> Result<Vec<Quote>> {
        if day.is_empty() {
            return Err(QuoteError::NoData);
        }

        // reject the whole bucket before touching the map
        for quote in &day.quotes {
            quote.validate()?;
        }

        let now = Utc::now().naive_utc();

        let mut days = self
            .days
            .write()
            .map_err(|e| QuoteError::Cache(e.to_string()))?;

        let entries = days.entry(day.published_at).or_default();
        let mut committed = Vec::with_capacity(day.quotes.len());

        for quote in &day.quotes {
            let mut record = quote.clone();
            record.published_at = day.published_at;

            // stamp timestamps depending on whether this pair is already
            // in the store; the original creation time survives overwrites
            match entries.get(&record.id) {
                Some(existing) => {
                    record.created_at = existing.created_at;
                    record.updated_at = Some(now);
                }
                None => {
                    record.created_at = Some(now);
                    record.updated_at = None;
                }
            }

            entries.insert(record.id.clone(), record.clone());
            committed.push(record);
        }

        Ok(committed)
    }

    /// Linear in the number of distinct dates stored; acceptable for a
    /// bounded history window. Caching the maximum would add an
    /// invalidation obligation on every upsert.
    fn latest_snapshot(&self) -> Result<Vec<Quote>> {
        let days = self
            .days
            .read()
            .map_err(|e| QuoteError::Cache(e.to_string()))?;

        let latest = days.keys().max().copied();

        Ok(latest
            .and_then(|date| days.get(&date))
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default())
    }

    fn history_by_id(&self, id: &str) -> Result<Vec<Quote>> {
        let days = self
            .days
            .read()
            .map_err(|e| QuoteError::Cache(e.to_string()))?;

        let mut history: Vec<Quote> = days
            .values()
            .filter_map(|entries| entries.get(id).cloned())
            .collect();

        history.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(published_at: NaiveDate, values: &[(&str, f64)]) -> DailyQuotes {
        DailyQuotes::from_values(
            published_at,
            values.iter().map(|(id, v)| (id.to_string(), *v)).collect(),
        )
    }

    #[tokio::test]
    async fn bulk_upsert_stamps_created_at_on_first_insert() {
        let store = MemoryQuoteStore::new();

        let committed = store
            .bulk_upsert(&day(date(2024, 1, 1), &[("EUR", 1.0)]))
            .await
            .unwrap();

        assert_eq!(committed.len(), 1);
        assert!(committed[0].created_at.is_some());
        assert!(committed[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn upsert_is_idempotent_and_preserves_created_at() {
        let store = MemoryQuoteStore::new();
        let first = store
            .bulk_upsert(&day(date(2024, 1, 1), &[("EUR", 1.0)]))
            .await
            .unwrap();

        let second = store
            .bulk_upsert(&day(date(2024, 1, 1), &[("EUR", 1.0)]))
            .await
            .unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(second[0].created_at, first[0].created_at);
        assert!(second[0].updated_at.is_some());

        let history = store.history_by_id("EUR").unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn empty_bucket_fails_with_no_data() {
        let store = MemoryQuoteStore::new();

        let result = store.bulk_upsert(&day(date(2024, 1, 1), &[])).await;

        assert!(matches!(result, Err(QuoteError::NoData)));
        assert!(store.latest_snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_record_aborts_the_bucket() {
        let store = MemoryQuoteStore::new();

        let result = store
            .bulk_upsert(&day(date(2024, 1, 1), &[("USD", 1.1), ("EUR", 0.0)]))
            .await;

        assert!(matches!(
            result,
            Err(QuoteError::InvalidCurrencyValue { .. })
        ));
        assert!(store.latest_snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn latest_snapshot_returns_only_the_maximum_date() {
        let store = MemoryQuoteStore::new();

        // insert newest first to prove insertion order does not matter
        store
            .bulk_upsert(&day(date(2024, 1, 2), &[("USD", 1.2)]))
            .await
            .unwrap();
        store
            .bulk_upsert(&day(date(2024, 1, 1), &[("USD", 1.1), ("EUR", 0.9)]))
            .await
            .unwrap();

        let snapshot = store.latest_snapshot().unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "USD");
        assert_eq!(snapshot[0].value, 1.2);
        assert_eq!(snapshot[0].published_at, date(2024, 1, 2));
    }

    #[tokio::test]
    async fn history_is_sorted_by_date_descending() {
        let store = MemoryQuoteStore::new();

        for d in [date(2024, 1, 2), date(2024, 1, 5), date(2024, 1, 3)] {
            store
                .bulk_upsert(&day(d, &[("EUR", 1.0)]))
                .await
                .unwrap();
        }

        let history = store.history_by_id("EUR").unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|q| q.published_at).collect();

        assert_eq!(
            dates,
            vec![date(2024, 1, 5), date(2024, 1, 3), date(2024, 1, 2)]
        );
    }

    #[tokio::test]
    async fn unknown_id_yields_an_empty_history() {
        let store = MemoryQuoteStore::new();

        store
            .bulk_upsert(&day(date(2024, 1, 1), &[("EUR", 1.0)]))
            .await
            .unwrap();

        assert!(store.history_by_id("JPY").unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_bulk_upserts_do_not_corrupt_the_store() {
        let store = Arc::new(MemoryQuoteStore::new());
        let published_at = date(2024, 1, 1);

        let mut handles = Vec::new();
        for worker in 0..8u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("CUR{}", worker);
                for round in 1..=25u32 {
                    let bucket = day(published_at, &[(id.as_str(), round as f64)]);
                    store.bulk_upsert(&bucket).await.unwrap();
                }
            }));
        }

        for result in join_all(handles).await {
            result.unwrap();
        }

        // each worker's last write wins for its own identifier
        let snapshot = store.latest_snapshot().unwrap();
        assert_eq!(snapshot.len(), 8);
        assert!(snapshot.iter().all(|q| q.value == 25.0));
        assert!(snapshot.iter().all(|q| q.updated_at.is_some()));
    }
}
