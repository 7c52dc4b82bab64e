//! Metric repository
//!
//! Metric names are globally unique. The get-or-create is a deliberate
//! two-step (select by name, then update-in-place or insert) instead of a
//! conflict-based upsert, mirroring the hierarchy repository.

use serde_json::Value as JsonValue;
use sqlx::{Row, SqliteConnection};

use crate::error::Result;

/// Resolve a metric by name, inserting on miss.
///
/// On hit the stored `dimensions` and `hierarchy_id` are replaced whole so
/// catalog edits (label changes, moves between categories) propagate.
pub async fn upsert_metric(
    conn: &mut SqliteConnection,
    name: &str,
    dimensions: &JsonValue,
    hierarchy_id: Option<i64>,
) -> Result<i64> {
    let dimensions_json = serde_json::to_string(dimensions)?;

    let existing = sqlx::query("SELECT id FROM metrics WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(row) = existing {
        let id: i64 = row.try_get("id")?;
        sqlx::query("UPDATE metrics SET dimensions = ?, hierarchy_id = ? WHERE id = ?")
            .bind(&dimensions_json)
            .bind(hierarchy_id)
            .bind(id)
            .execute(conn)
            .await?;
        return Ok(id);
    }

    let row = sqlx::query(
        "INSERT INTO metrics (name, dimensions, hierarchy_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(&dimensions_json)
    .bind(hierarchy_id)
    .fetch_one(conn)
    .await?;
    Ok(row.try_get("id")?)
}

/// Look up a persisted metric id by exact name.
pub async fn find_metric_id(conn: &mut SqliteConnection, name: &str) -> Result<Option<i64>> {
    let row = sqlx::query("SELECT id FROM metrics WHERE name = ?")
        .bind(name)
        .fetch_optional(conn)
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("id")?)),
        None => Ok(None),
    }
}
