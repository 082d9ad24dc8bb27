use async_trait::async_trait;
use log::debug;

use super::feed_errors::{FeedError, Result};
use super::feed_model::FeedItem;

/// Boundary to the external feed publisher. Implementations supply the
/// already-parsed item sequence; transport and wire format stay behind
/// this trait.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FeedItem>>;
}

/// Feed source reading a JSON document of feed items over HTTP.
pub struct HttpFeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FeedError::EmptyFeedUrl);
        }

        Ok(Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        debug!("fetching feed from {}", self.url);

        let items = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<FeedItem>>()
            .await?;

        Ok(items)
    }
}
