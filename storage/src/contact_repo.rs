//! Contact-message repository: insert and list for the `contact_messages` table.

use standeal_core::ContactMessage;
use tracing::info;

use crate::sqlite_pool::SqlitePoolManager;
use crate::{StorageError, MAX_LIST};

#[derive(Clone)]
pub struct ContactRepository {
    pool_manager: SqlitePoolManager,
}

impl ContactRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub(crate) async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    pub async fn insert(&self, contact: &ContactMessage) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, phone, subject, message, timestamp)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(contact.timestamp)
        .execute(self.pool_manager.pool())
        .await?;

        info!(id = %contact.id, subject = %contact.subject, "Saved contact message");
        Ok(())
    }

    /// Returns messages in insertion order, capped at [`MAX_LIST`].
    pub async fn list(&self) -> Result<Vec<ContactMessage>, StorageError> {
        let messages: Vec<ContactMessage> =
            sqlx::query_as("SELECT * FROM contact_messages ORDER BY rowid LIMIT ?")
                .bind(MAX_LIST)
                .fetch_all(self.pool_manager.pool())
                .await?;

        info!(count = messages.len(), "Retrieved contact messages");
        Ok(messages)
    }
}
