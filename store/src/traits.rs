//! Async repository contract for the persistence layer.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so
//! that the futures are guaranteed `Send` — callers hand repository calls
//! to `tokio::spawn`.

use std::future::Future;

use chrono::{DateTime, Utc};
use inventory::Product;

use crate::StoreError;

/// Repository for inventoried products.
///
/// Every operation suspends the caller until the underlying statement
/// completes; none of them retries or queues. Implementations must raise
/// [`StoreError::MissingId`] from `update` before touching the store when
/// the product has no id.
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return its store-assigned id. Any id
    /// already set on `product` is ignored.
    fn create(
        &self,
        product: &Product,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// Load one product by id.
    fn get(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    /// All persisted products, in store-native order. Sorting and
    /// filtering for display is the view layer's job.
    fn list(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    /// Products expiring at or before `cutoff`.
    fn list_expiring_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    /// Overwrite title, image and expiry of the row matching
    /// `product.id`. The id itself is immutable. Fails with
    /// [`StoreError::NotFound`] when no row matches.
    fn update(&self, product: &Product) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete by id. Deleting an id that is already absent succeeds.
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), StoreError>> + Send;
}
