//! SQLite-backed repository for stored products.

use chrono::{DateTime, Utc};
use inventory::Product;
use sqlx::SqlitePool;

use super::helpers::{decode_expiry, encode_expiry};
use crate::traits::ProductRepository;
use crate::StoreError;

/// Row type for product queries, mapped via `sqlx::FromRow`.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    titulo: String,
    #[sqlx(rename = "imagenUri")]
    imagen_uri: Option<String>,
    #[sqlx(rename = "fechaCaducidad")]
    fecha_caducidad: String,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, StoreError> {
        Ok(Product {
            id: Some(self.id),
            title: self.titulo,
            image_uri: self.imagen_uri,
            expires_at: decode_expiry(&self.fecha_caducidad)?,
        })
    }
}

/// SQLite implementation of [`ProductRepository`].
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &Product) -> Result<i64, StoreError> {
        let expiry = encode_expiry(&product.expires_at);

        let result = sqlx::query(
            r#"
            INSERT INTO productos (titulo, imagenUri, fechaCaducidad)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&product.title)
        .bind(&product.image_uri)
        .bind(expiry)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, title = %product.title, "product created");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, titulo, imagenUri, fechaCaducidad
            FROM productos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Read)?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, titulo, imagenUri, fechaCaducidad
            FROM productos
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Read)?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn list_expiring_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Product>, StoreError> {
        // Lexical <= on the column is chronological <= because every
        // stored value uses the fixed-width encoding.
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, titulo, imagenUri, fechaCaducidad
            FROM productos
            WHERE fechaCaducidad <= ?
            "#,
        )
        .bind(encode_expiry(&cutoff))
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Read)?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        // Hard precondition, checked before any I/O.
        let id = product.id.ok_or(StoreError::MissingId)?;
        let expiry = encode_expiry(&product.expires_at);

        let result = sqlx::query(
            r#"
            UPDATE productos
            SET titulo = ?, imagenUri = ?, fechaCaducidad = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.title)
        .bind(&product.image_uri)
        .bind(expiry)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(id, "product updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        // Deleting an absent id is a no-op, not an error.
        sqlx::query("DELETE FROM productos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        tracing::debug!(id, "product deleted");
        Ok(())
    }
}
