//! Local SQLite persistence for the product inventory.
//!
//! [`sqlite::Database`] owns the connection pool and runs the embedded
//! migrations; [`sqlite::SqliteProductRepository`] implements
//! [`traits::ProductRepository`] on top of it. View derivation lives in
//! the `inventory` crate and never touches this one — screens load
//! products through the repository and hand the result to the pure view
//! functions.

pub mod config;
pub mod traits;

mod sqlite;

pub use sqlite::{Database, SqliteProductRepository};

/// Errors from the persistence layer.
///
/// Open-time failures (`Unavailable`, `Io`, `Migration`) mean the store
/// cannot be used at all; `Read`/`Write` are per-statement failures after
/// a successful open. Nothing is retried internally — every error
/// surfaces to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing database could not be opened or connected.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("migration failed: {0}")]
    Migration(String),
    /// A SELECT failed after the store was opened.
    #[error("read failed: {0}")]
    Read(#[source] sqlx::Error),
    /// An INSERT, UPDATE, or DELETE failed after the store was opened.
    #[error("write failed: {0}")]
    Write(#[source] sqlx::Error),
    /// `update` was called on a product that was never persisted.
    #[error("product has no id; create it before updating")]
    MissingId,
    /// `update` targeted an id that is not in the store.
    #[error("no product with id {0}")]
    NotFound(i64),
    /// A stored expiry string failed to parse back into a timestamp.
    #[error("malformed expiry timestamp {0:?} in store")]
    MalformedExpiry(String),
}
