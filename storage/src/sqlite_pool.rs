//! SQLite connection pool wrapper with explicit lifecycle.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Manages the single shared SQLite pool; creates the DB file if missing.
/// Constructed at startup, closed explicitly at shutdown.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given URL (`sqlite:` URL, `sqlite::memory:`,
    /// or a bare file path).
    ///
    /// An in-memory database is pinned to a single pooled connection that
    /// never expires: every `:memory:` connection is its own database, so a
    /// second connection would not see the tables.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        info!(database_url, "Initializing SQLite pool");

        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?
        } else {
            SqliteConnectOptions::new().filename(database_url)
        }
        .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new();
        if database_url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the pool, waiting for in-flight connections to finish.
    pub async fn close(&self) {
        info!("Closing SQLite pool");
        self.pool.close().await;
    }
}
