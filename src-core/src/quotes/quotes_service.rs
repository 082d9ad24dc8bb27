use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use log::{debug, info};

use super::quotes_errors::QuoteError;
use super::quotes_model::{DailyQuotes, Quote};
use super::quotes_payload::parse_payload;
use super::quotes_traits::{QuoteServiceTrait, QuoteStore};
use crate::errors::Result;
use crate::feed::FeedSource;

/// Façade owning a store and a feed source; the only entry points the
/// CLI and HTTP layers call.
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    feed: Arc<dyn FeedSource>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>, feed: Arc<dyn FeedSource>) -> Self {
        Self { store, feed }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    /// Imports the external feed as date-bucketed quote records.
    ///
    /// Items are processed strictly in feed order; the first bad item or
    /// record aborts the whole run and nothing from its bucket commits.
    async fn import(&self) -> Result<()> {
        let items = self.feed.fetch().await?;
        info!("importing {} feed item(s)", items.len());

        for item in &items {
            let values = parse_payload(&item.description)?;

            let published_at = item.published_at.with_timezone(&Local).date_naive();
            let day = DailyQuotes::from_values(published_at, values);

            day.validate()?;

            let committed = self
                .store
                .bulk_upsert(&day)
                .await
                .map_err(|source| QuoteError::Import {
                    date: day.published_at,
                    source: Box::new(source),
                })?;

            debug!(
                "committed {} quote(s) for {}",
                committed.len(),
                day.published_at
            );
        }

        Ok(())
    }

    fn get_latest(&self) -> Result<Vec<Quote>> {
        Ok(self.store.latest_snapshot()?)
    }

    fn get_by_id(&self, id: &str) -> Result<Vec<Quote>> {
        Ok(self.store.history_by_id(&id.to_uppercase())?)
    }
}
