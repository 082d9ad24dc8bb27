pub(crate) mod quotes_errors;
pub(crate) mod quotes_model;
pub(crate) mod quotes_payload;
pub(crate) mod quotes_service;
pub(crate) mod quotes_store_memory;
pub(crate) mod quotes_store_sqlite;
pub(crate) mod quotes_traits;

// Re-export the public interface
pub use quotes_errors::QuoteError;
pub use quotes_model::{DailyQuotes, Quote};
pub use quotes_payload::parse_payload;
pub use quotes_service::QuoteService;
pub use quotes_store_memory::MemoryQuoteStore;
pub use quotes_store_sqlite::SqliteQuoteStore;
pub use quotes_traits::{QuoteServiceTrait, QuoteStore};
