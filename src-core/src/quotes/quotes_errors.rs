use chrono::NaiveDate;
use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("database connection error: {0}")]
    DatabaseConnection(#[from] r2d2::Error),

    #[error("invalid payload format")]
    InvalidPayloadFormat,

    #[error("failed to parse value: {token}")]
    ValueParse {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid currency id")]
    EmptyCurrencyId,

    #[error("invalid currency value for {id}")]
    InvalidCurrencyValue { id: String },

    #[error("quote validation failed for date {date}: {source}")]
    InvalidDay {
        date: NaiveDate,
        #[source]
        source: Box<QuoteError>,
    },

    #[error("no data")]
    NoData,

    #[error("currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("failed to import quotes for date {date}: {source}")]
    Import {
        date: NaiveDate,
        #[source]
        source: Box<QuoteError>,
    },

    #[error("quote cache access failed: {0}")]
    Cache(String),
}
