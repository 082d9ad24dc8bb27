use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::quotes_errors::{QuoteError, Result};

/// Domain model representing one quote: a named numeric value for one
/// identifier on one publication date.
///
/// `created_at`/`updated_at` are stamped by the store on commit; records
/// produced by the import pipeline carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub value: f64,
    pub published_at: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Quote {
    pub fn new(id: impl Into<String>, value: f64, published_at: NaiveDate) -> Self {
        Self {
            id: id.into().to_uppercase(),
            value,
            published_at,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(QuoteError::EmptyCurrencyId);
        }

        // NOTE: technically a rate could be zero, but very unlikely
        if self.value == 0.0 {
            return Err(QuoteError::InvalidCurrencyValue {
                id: self.id.clone(),
            });
        }

        Ok(())
    }
}

/// A set of quotes sharing one publication date, produced from a single
/// feed item. Identifiers are unique within one bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuotes {
    pub published_at: NaiveDate,
    pub quotes: Vec<Quote>,
}

impl DailyQuotes {
    pub fn from_values(published_at: NaiveDate, values: HashMap<String, f64>) -> Self {
        let quotes = values
            .into_iter()
            .map(|(id, value)| Quote::new(id, value, published_at))
            .collect();

        Self {
            published_at,
            quotes,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for quote in &self.quotes {
            quote.validate().map_err(|source| QuoteError::InvalidDay {
                date: self.published_at,
                source: Box::new(source),
            })?;
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Database model for quotes
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(primary_key(id, published_at))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: String,
    pub value: f64,
    pub published_at: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<QuoteDB> for Quote {
    fn from(db: QuoteDB) -> Self {
        Quote {
            id: db.id,
            value: db.value,
            published_at: db.published_at,
            created_at: Some(db.created_at),
            updated_at: db.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_normalizes_id_to_upper_case() {
        let quote = Quote::new("usd", 1.5, date(2024, 1, 1));
        assert_eq!(quote.id, "USD");
        assert!(quote.created_at.is_none());
        assert!(quote.updated_at.is_none());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let quote = Quote::new("  ", 1.5, date(2024, 1, 1));
        assert!(matches!(
            quote.validate(),
            Err(QuoteError::EmptyCurrencyId)
        ));
    }

    #[test]
    fn validate_rejects_zero_value() {
        let quote = Quote::new("USD", 0.0, date(2024, 1, 1));
        assert!(matches!(
            quote.validate(),
            Err(QuoteError::InvalidCurrencyValue { id }) if id == "USD"
        ));
    }

    #[test]
    fn quotes_serialize_camel_case() {
        let quote = Quote::new("USD", 1.5, date(2024, 1, 1));
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["publishedAt"], "2024-01-01");
        assert_eq!(json["value"], 1.5);
        assert!(json["createdAt"].is_null());
    }

    #[test]
    fn day_validation_cites_the_date() {
        let day = DailyQuotes::from_values(
            date(2024, 1, 1),
            HashMap::from([("USD".to_string(), 0.0)]),
        );

        match day.validate() {
            Err(QuoteError::InvalidDay { date: d, source }) => {
                assert_eq!(d, date(2024, 1, 1));
                assert!(matches!(*source, QuoteError::InvalidCurrencyValue { .. }));
            }
            other => panic!("expected InvalidDay, got {:?}", other),
        }
    }
}
