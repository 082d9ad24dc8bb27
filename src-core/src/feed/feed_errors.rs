use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("invalid feed url")]
    EmptyFeedUrl,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed feed: {0}")]
    Malformed(String),
}
