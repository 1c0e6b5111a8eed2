use chrono::{NaiveDate, TimeZone, Utc};
use inventory::{calendar_index, filtered, partition, ExpiryFilter, Product, UrgencyBand};

use super::{Database, SqliteProductRepository};
use crate::traits::ProductRepository;
use crate::StoreError;

fn sample_product(title: &str, y: i32, m: u32, d: u32) -> Product {
    Product::draft(
        title,
        Some(format!("file:///photos/{title}.jpg")),
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_product_lifecycle() {
    let db = Database::new_in_memory().await.unwrap();
    let repo = SqliteProductRepository::new(db.pool().clone());

    let id = repo
        .create(&sample_product("Leche", 2025, 1, 10))
        .await
        .unwrap();

    let mut loaded = repo.get(id).await.unwrap().unwrap();
    assert_eq!(loaded.title, "Leche");

    loaded.title = "Leche entera".to_string();
    repo.update(&loaded).await.unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Leche entera");

    repo.delete(id).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());

    // Once deleted, the id is no longer addressable.
    let err = repo.update(&loaded).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_views_over_stored_products() {
    let db = Database::new_in_memory().await.unwrap();
    let repo = SqliteProductRepository::new(db.pool().clone());

    repo.create(&sample_product("Caducado", 2024, 12, 20))
        .await
        .unwrap();
    repo.create(&sample_product("Urgente", 2025, 1, 3))
        .await
        .unwrap();
    repo.create(&sample_product("Aviso", 2025, 1, 8))
        .await
        .unwrap();
    repo.create(&sample_product("Tranquilo", 2025, 2, 1))
        .await
        .unwrap();

    let products = repo.list().await.unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let split = partition(&products, now);
    assert_eq!(split.expired.len(), 1);
    assert_eq!(split.expired[0].title, "Caducado");

    let upcoming = filtered(&products, now, ExpiryFilter::Upcoming);
    let titles: Vec<&str> = upcoming.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Urgente", "Aviso", "Tranquilo"]);

    let bands: Vec<Option<UrgencyBand>> = upcoming
        .iter()
        .map(|p| inventory::band_for(p, now))
        .collect();
    assert_eq!(
        bands,
        vec![
            Some(UrgencyBand::Urgent),
            Some(UrgencyBand::Warning),
            Some(UrgencyBand::Normal),
        ]
    );

    let index = calendar_index(&products, NaiveDate::from_ymd_opt(2025, 1, 3));
    let jan3 = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
    assert!(index.days[&jan3].selected);
    assert_eq!(index.days[&jan3].markers.len(), 1);
}

#[tokio::test]
async fn test_list_expiring_before_matches_full_scan() {
    let db = Database::new_in_memory().await.unwrap();
    let repo = SqliteProductRepository::new(db.pool().clone());

    for (title, m, d) in [("A", 1, 5), ("B", 1, 15), ("C", 2, 20), ("D", 3, 1)] {
        repo.create(&sample_product(title, 2025, m, d)).await.unwrap();
    }

    let cutoff = Utc.with_ymd_and_hms(2025, 2, 20, 0, 0, 0).unwrap();
    let via_query = repo.list_expiring_before(cutoff).await.unwrap();

    let via_scan: Vec<Product> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.expires_at <= cutoff)
        .collect();

    assert_eq!(via_query, via_scan);
    assert_eq!(via_query.len(), 3);
}

#[tokio::test]
async fn test_concurrent_writers_through_one_pool() {
    let db = Database::new_in_memory().await.unwrap();
    let pool = db.pool().clone();

    let creates_pool = pool.clone();
    let creates = tokio::spawn(async move {
        let repo = SqliteProductRepository::new(creates_pool);
        for i in 0..10_u32 {
            repo.create(&sample_product(&format!("lote_a_{i}"), 2025, 1, 1 + i))
                .await
                .unwrap();
        }
    });

    let more_creates_pool = pool.clone();
    let more_creates = tokio::spawn(async move {
        let repo = SqliteProductRepository::new(more_creates_pool);
        for i in 0..10_u32 {
            repo.create(&sample_product(&format!("lote_b_{i}"), 2025, 2, 1 + i))
                .await
                .unwrap();
        }
    });

    creates.await.unwrap();
    more_creates.await.unwrap();

    let repo = SqliteProductRepository::new(pool);
    assert_eq!(repo.list().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("inventario.db");

    let id = {
        let db = Database::open(&db_path).await.unwrap();
        let repo = SqliteProductRepository::new(db.pool().clone());
        repo.create(&sample_product("Leche", 2025, 1, 10))
            .await
            .unwrap()
    };

    let db = Database::open(&db_path).await.unwrap();
    let repo = SqliteProductRepository::new(db.pool().clone());
    let loaded = repo.get(id).await.unwrap().unwrap();
    assert_eq!(loaded.title, "Leche");
}
