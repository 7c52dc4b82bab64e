//! Integration tests for the store repositories
//!
//! Covers the null-safe (name, parent) node match, metric replace-in-place
//! and the observation conflict rule.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use chrono::NaiveDate;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};

use series_store::{
    find_metric_id, get_or_create_node, init_schema, table_counts, upsert_metric,
    upsert_observation,
};

async fn setup_store() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    init_schema(&pool).await.expect("Failed to create schema");
    pool
}

#[tokio::test]
async fn test_root_node_matches_only_roots() {
    let pool = setup_store().await;
    let mut conn = pool.acquire().await.unwrap();

    let root = get_or_create_node(&mut conn, "Ratios", None).await.unwrap();
    let parent = get_or_create_node(&mut conn, "Banks", None).await.unwrap();
    let scoped = get_or_create_node(&mut conn, "Ratios", Some(parent))
        .await
        .unwrap();

    // Same name, different parent scope: distinct nodes.
    assert_ne!(root, scoped);

    // Resolving again hits the existing rows.
    assert_eq!(
        get_or_create_node(&mut conn, "Ratios", None).await.unwrap(),
        root
    );
    assert_eq!(
        get_or_create_node(&mut conn, "Ratios", Some(parent))
            .await
            .unwrap(),
        scoped
    );

    drop(conn);
    let counts = table_counts(&pool).await.unwrap();
    assert_eq!(counts.hierarchy, 3);
}

#[tokio::test]
async fn test_metric_dimensions_replaced_whole() {
    let pool = setup_store().await;
    let mut conn = pool.acquire().await.unwrap();

    let id = upsert_metric(
        &mut conn,
        "kri.ROE.ES",
        &json!({"friendly_name": "ROE Spain", "unit": "pct"}),
        None,
    )
    .await
    .unwrap();

    let node = get_or_create_node(&mut conn, "Profitability", None)
        .await
        .unwrap();
    let id_again = upsert_metric(
        &mut conn,
        "kri.ROE.ES",
        &json!({"friendly_name": "Return on Equity"}),
        Some(node),
    )
    .await
    .unwrap();
    assert_eq!(id, id_again);

    // Full replace, not merge: the old "unit" key is gone.
    let row = sqlx::query("SELECT dimensions, hierarchy_id FROM metrics WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    let dims: String = row.try_get("dimensions").unwrap();
    assert!(dims.contains("Return on Equity"));
    assert!(!dims.contains("unit"));
    let hierarchy_id: Option<i64> = row.try_get("hierarchy_id").unwrap();
    assert_eq!(hierarchy_id, Some(node));

    assert_eq!(
        find_metric_id(&mut conn, "kri.ROE.ES").await.unwrap(),
        Some(id)
    );
    assert_eq!(find_metric_id(&mut conn, "missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_observation_conflict_replaces_value_only() {
    let pool = setup_store().await;
    let mut conn = pool.acquire().await.unwrap();

    let metric_id = upsert_metric(&mut conn, "kri.ROE.ES", &json!({}), None)
        .await
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    upsert_observation(&mut conn, date, 0.082, metric_id, &json!({"source": "q1"}))
        .await
        .unwrap();

    let row = sqlx::query("SELECT id, value_meta FROM observations")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    let id_before: i64 = row.try_get("id").unwrap();
    let meta_before: String = row.try_get("value_meta").unwrap();

    // Re-ingest with a different meta document: value changes, id and the
    // stored meta do not.
    upsert_observation(&mut conn, date, 0.091, metric_id, &json!({"source": "q2"}))
        .await
        .unwrap();

    let row = sqlx::query("SELECT id, value, value_meta FROM observations")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    let id_after: i64 = row.try_get("id").unwrap();
    let value: f64 = row.try_get("value").unwrap();
    let meta_after: String = row.try_get("value_meta").unwrap();

    assert_eq!(id_before, id_after);
    assert!((value - 0.091).abs() < 1e-9);
    assert_eq!(meta_before, meta_after);

    // A different date is a separate row.
    let feb = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
    upsert_observation(&mut conn, feb, 0.080, metric_id, &json!({}))
        .await
        .unwrap();

    drop(conn);
    let counts = table_counts(&pool).await.unwrap();
    assert_eq!(counts.observations, 2);
}
