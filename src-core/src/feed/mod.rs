pub mod feed_errors;
pub mod feed_model;
pub mod feed_source;

pub use feed_errors::FeedError;
pub use feed_model::FeedItem;
pub use feed_source::{FeedSource, HttpFeedSource};
