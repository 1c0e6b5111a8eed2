//! SQLite-backed repository implementation.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode** — allows one writer and multiple concurrent readers.
//! - **Foreign keys enabled** — enforced at the connection level.
//! - **Embedded migrations** — `sqlx::migrate!` runs
//!   `migrations/001_initial_schema.sql` automatically when
//!   [`Database::open`] is called. The schema is idempotent
//!   (`CREATE TABLE IF NOT EXISTS`), so reopening an existing file is
//!   safe.
//!
//! ## Repository
//!
//! [`SqliteProductRepository`] holds a `SqlitePool` and implements
//! [`crate::traits::ProductRepository`] over the `productos` table.
//! The expiry column is `TEXT` and round-trips through the encode/decode
//! helpers in [`helpers`]; the fixed-width encoding is what makes the
//! lexical `<=` in `list_expiring_before` a chronological comparison.

mod database;
mod product_repo;
#[cfg(test)]
mod integration_tests;
pub(crate) mod helpers;

pub use database::Database;
pub use product_repo::SqliteProductRepository;
