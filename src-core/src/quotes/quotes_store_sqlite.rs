use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

use super::quotes_errors::{QuoteError, Result};
use super::quotes_model::{DailyQuotes, Quote, QuoteDB};
use super::quotes_traits::QuoteStore;
use crate::db::DbPool;
use crate::schema::quotes;

/// Transactional backend over the `quotes` table, keyed by
/// `(id, published_at)`. Every call round-trips to the database; the
/// atomicity scope of a bulk write is the SQL transaction.
pub struct SqliteQuoteStore {
    pool: Arc<DbPool>,
}

impl SqliteQuoteStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Single-record lookup by primary key; zero rows translate into
    /// `CurrencyNotFound`.
    pub fn find_by_key(&self, id: &str, date: NaiveDate) -> Result<Quote> {
        let mut conn = self.pool.get()?;

        quotes::table
            .find((id, date))
            .select(QuoteDB::as_select())
            .first::<QuoteDB>(&mut conn)
            .optional()?
            .map(Quote::from)
            .ok_or_else(|| QuoteError::CurrencyNotFound(id.to_string()))
    }

    /// All records published at the given date; zero rows are an empty
    /// success.
    pub fn quotes_by_date(&self, date: NaiveDate) -> Result<Vec<Quote>> {
        let mut conn = self.pool.get()?;

        quotes::table
            .filter(quotes::published_at.eq(date))
            .select(QuoteDB::as_select())
            .load::<QuoteDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Quote::from).collect())
            .map_err(QuoteError::Database)
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn bulk_upsert(&self, day: &DailyQuotes) -> Result<Vec<Quote>> {
        if day.is_empty() {
            return Err(QuoteError::NoData);
        }

        let mut conn = self.pool.get()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, QuoteError, _>(|conn| {
            let mut committed = Vec::with_capacity(day.quotes.len());

            for quote in &day.quotes {
                // the first invalid record rolls the whole bucket back
                quote.validate()?;

                let row = QuoteDB {
                    id: quote.id.clone(),
                    value: quote.value,
                    published_at: day.published_at,
                    created_at: now,
                    updated_at: None,
                };

                // a key conflict replaces the value and stamps the update
                // time; the original created_at is left untouched
                diesel::insert_into(quotes::table)
                    .values(&row)
                    .on_conflict((quotes::id, quotes::published_at))
                    .do_update()
                    .set((
                        quotes::value.eq(row.value),
                        quotes::updated_at.eq(now),
                    ))
                    .execute(conn)?;

                let stored = quotes::table
                    .find((row.id.as_str(), row.published_at))
                    .select(QuoteDB::as_select())
                    .first::<QuoteDB>(conn)?;

                committed.push(Quote::from(stored));
            }

            Ok(committed)
        })
    }

    fn latest_snapshot(&self) -> Result<Vec<Quote>> {
        let mut conn = self.pool.get()?;

        let latest: Option<NaiveDate> = quotes::table
            .select(diesel::dsl::max(quotes::published_at))
            .first(&mut conn)?;

        match latest {
            Some(date) => quotes::table
                .filter(quotes::published_at.eq(date))
                .select(QuoteDB::as_select())
                .load::<QuoteDB>(&mut conn)
                .map(|rows| rows.into_iter().map(Quote::from).collect())
                .map_err(QuoteError::Database),
            None => Ok(Vec::new()),
        }
    }

    fn history_by_id(&self, id: &str) -> Result<Vec<Quote>> {
        let mut conn = self.pool.get()?;

        quotes::table
            .filter(quotes::id.eq(id))
            .order(quotes::published_at.desc())
            .select(QuoteDB::as_select())
            .load::<QuoteDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Quote::from).collect())
            .map_err(QuoteError::Database)
    }
}
