use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use ratefeed_core::db;
use ratefeed_core::feed::{FeedSource, HttpFeedSource};
use ratefeed_core::quotes::{
    MemoryQuoteStore, QuoteService, QuoteServiceTrait, QuoteStore, SqliteQuoteStore,
};

use crate::config::{Config, StoreKind};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let feed: Arc<dyn FeedSource> = Arc::new(HttpFeedSource::new(&config.feed_url)?);

    let store: Arc<dyn QuoteStore> = match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory quote store");
            Arc::new(MemoryQuoteStore::new())
        }
        StoreKind::Sqlite => {
            let db_path = db::init(&config.db_path)?;
            tracing::info!("Database path in use: {}", db_path);
            let pool = db::create_pool(&db_path)?;
            db::run_migrations(&pool)?;
            Arc::new(SqliteQuoteStore::new(pool))
        }
    };

    let quote_service = Arc::new(QuoteService::new(store, feed));

    Ok(Arc::new(AppState { quote_service }))
}
