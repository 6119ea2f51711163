//! Status-check repository: insert and list for the `status_checks` table.

use standeal_core::StatusCheck;
use tracing::info;

use crate::sqlite_pool::SqlitePoolManager;
use crate::{StorageError, MAX_LIST};

#[derive(Clone)]
pub struct StatusRepository {
    pool_manager: SqlitePoolManager,
}

impl StatusRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub(crate) async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS status_checks (
                id TEXT PRIMARY KEY,
                client_name TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    pub async fn insert(&self, check: &StatusCheck) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, timestamp)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(self.pool_manager.pool())
        .await?;

        info!(id = %check.id, "Saved status check");
        Ok(())
    }

    /// Returns status checks in insertion order, capped at [`MAX_LIST`].
    pub async fn list(&self) -> Result<Vec<StatusCheck>, StorageError> {
        let checks: Vec<StatusCheck> =
            sqlx::query_as("SELECT * FROM status_checks ORDER BY rowid LIMIT ?")
                .bind(MAX_LIST)
                .fetch_all(self.pool_manager.pool())
                .await?;

        info!(count = checks.len(), "Retrieved status checks");
        Ok(checks)
    }
}
