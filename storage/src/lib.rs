//! Storage crate: SQLite persistence for the three record kinds.
//!
//! ## Modules
//!
//! - [`error`] – StorageError
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`store`] – RecordStore (pool + all repositories)
//! - [`quote_repo`] / [`contact_repo`] / [`status_repo`] – per-kind repositories

mod contact_repo;
mod error;
mod quote_repo;
mod sqlite_pool;
mod status_repo;
mod store;

pub use contact_repo::ContactRepository;
pub use error::StorageError;
pub use quote_repo::QuoteRepository;
pub use sqlite_pool::SqlitePoolManager;
pub use status_repo::StatusRepository;
pub use store::RecordStore;

/// List operations return at most this many records, in storage order.
pub const MAX_LIST: i64 = 1000;
