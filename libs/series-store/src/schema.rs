//! Database schema initialization
//!
//! Table creation is deliberately light on constraints: uniqueness of
//! `hierarchy(name, parent_id)` and `metrics(name)` is owned by the
//! two-step lookup-then-write repositories, not the schema. Only
//! `observations` carries a UNIQUE pair, which backs its native value
//! upsert.

use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::error::Result;

pub const HIERARCHY_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS hierarchy (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        parent_id INTEGER REFERENCES hierarchy(id)
    )";

pub const METRICS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS metrics (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        dimensions TEXT,
        hierarchy_id INTEGER REFERENCES hierarchy(id)
    )";

pub const OBSERVATIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS observations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        value REAL,
        metric_id INTEGER REFERENCES metrics(id),
        value_meta TEXT,
        UNIQUE(metric_id, date)
    )";

/// Create all tables and lookup indexes for one store.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(HIERARCHY_TABLE).execute(pool).await?;
    sqlx::query(METRICS_TABLE).execute(pool).await?;
    sqlx::query(OBSERVATIONS_TABLE).execute(pool).await?;

    create_indexes(pool).await?;

    info!("Schema initialized");
    Ok(())
}

/// Create lookup indexes (non-unique)
async fn create_indexes(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_hierarchy_name_parent ON hierarchy(name, parent_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_metrics_name ON metrics(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_observations_metric ON observations(metric_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Row counts for the status surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreCounts {
    pub hierarchy: i64,
    pub metrics: i64,
    pub observations: i64,
}

/// Count rows in each store table.
pub async fn table_counts(pool: &SqlitePool) -> Result<StoreCounts> {
    Ok(StoreCounts {
        hierarchy: count(pool, "hierarchy").await?,
        metrics: count(pool, "metrics").await?,
        observations: count(pool, "observations").await?,
    })
}

// Table names are internal constants, never user input.
async fn count(pool: &SqlitePool, table: &str) -> Result<i64> {
    let row = sqlx::query(&format!("SELECT COUNT(*) AS n FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(row.try_get("n")?)
}
