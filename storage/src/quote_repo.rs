//! Transport-quote repository: insert and list for the `transport_quotes` table.

use standeal_core::TransportQuote;
use tracing::info;

use crate::sqlite_pool::SqlitePoolManager;
use crate::{StorageError, MAX_LIST};

#[derive(Clone)]
pub struct QuoteRepository {
    pool_manager: SqlitePoolManager,
}

impl QuoteRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub(crate) async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transport_quotes (
                id TEXT PRIMARY KEY,
                client_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                pickup_location TEXT NOT NULL,
                delivery_location TEXT NOT NULL,
                cargo_type TEXT NOT NULL,
                cargo_weight REAL,
                cargo_dimensions TEXT,
                transport_type TEXT NOT NULL,
                urgency TEXT NOT NULL,
                additional_info TEXT,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    /// Persists a fully formed quote. Assigns nothing; the caller supplies
    /// id and timestamp.
    pub async fn insert(&self, quote: &TransportQuote) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO transport_quotes
                (id, client_name, email, phone, pickup_location, delivery_location,
                 cargo_type, cargo_weight, cargo_dimensions, transport_type, urgency,
                 additional_info, timestamp)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&quote.id)
        .bind(&quote.client_name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.pickup_location)
        .bind(&quote.delivery_location)
        .bind(&quote.cargo_type)
        .bind(quote.cargo_weight)
        .bind(&quote.cargo_dimensions)
        .bind(quote.transport_type)
        .bind(quote.urgency)
        .bind(&quote.additional_info)
        .bind(quote.timestamp)
        .execute(self.pool_manager.pool())
        .await?;

        info!(id = %quote.id, client_name = %quote.client_name, "Saved transport quote");
        Ok(())
    }

    /// Returns quotes in insertion order, capped at [`MAX_LIST`].
    pub async fn list(&self) -> Result<Vec<TransportQuote>, StorageError> {
        let quotes: Vec<TransportQuote> =
            sqlx::query_as("SELECT * FROM transport_quotes ORDER BY rowid LIMIT ?")
                .bind(MAX_LIST)
                .fetch_all(self.pool_manager.pool())
                .await?;

        info!(count = quotes.len(), "Retrieved transport quotes");
        Ok(quotes)
    }
}
