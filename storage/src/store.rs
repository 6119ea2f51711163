//! RecordStore: the shared storage handle (pool + all repositories).
//!
//! Constructed once at startup, injected into request handlers, closed at
//! shutdown. Runs the table DDL for every record kind on connect.

use tracing::info;

use crate::{ContactRepository, QuoteRepository, SqlitePoolManager, StatusRepository};

#[derive(Clone)]
pub struct RecordStore {
    pool_manager: SqlitePoolManager,
    pub quotes: QuoteRepository,
    pub contacts: ContactRepository,
    pub status: StatusRepository,
}

impl RecordStore {
    /// Opens the database and ensures all tables exist.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;

        let quotes = QuoteRepository::new(pool_manager.clone());
        let contacts = ContactRepository::new(pool_manager.clone());
        let status = StatusRepository::new(pool_manager.clone());

        info!("Creating database tables if not exist");
        quotes.init().await?;
        contacts.init().await?;
        status.init().await?;

        Ok(Self {
            pool_manager,
            quotes,
            contacts,
            status,
        })
    }

    /// Releases the underlying pool. Call on shutdown.
    pub async fn close(&self) {
        self.pool_manager.close().await;
    }
}
