use async_trait::async_trait;

use super::quotes_errors::Result;
use super::quotes_model::{DailyQuotes, Quote};

/// Persistence contract every quote backend implements. This is the only
/// seam a new backend has to fill in to become usable by the service.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Writes every record of the bucket, stamping `created_at` on the
    /// first insertion of an `(id, published_at)` pair and `updated_at`
    /// on overwrite. An empty bucket fails with `NoData`; a record-level
    /// validation failure aborts the whole call and the caller must
    /// assume nothing was persisted.
    async fn bulk_upsert(&self, day: &DailyQuotes) -> Result<Vec<Quote>>;

    /// Returns every record published at the maximum stored date. An
    /// empty store yields an empty result, not an error.
    fn latest_snapshot(&self) -> Result<Vec<Quote>>;

    /// Returns all records for the identifier, most recent date first.
    /// Unknown identifiers yield an empty result.
    fn history_by_id(&self, id: &str) -> Result<Vec<Quote>>;
}

/// Entry points exposed to the CLI and HTTP layers. Neither layer may
/// reach past this trait into store internals.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    async fn import(&self) -> crate::errors::Result<()>;
    fn get_latest(&self) -> crate::errors::Result<Vec<Quote>>;
    fn get_by_id(&self, id: &str) -> crate::errors::Result<Vec<Quote>>;
}
