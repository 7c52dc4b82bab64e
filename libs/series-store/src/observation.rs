//! Observation repository

use chrono::NaiveDate;
use serde_json::Value as JsonValue;
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::error::Result;

/// Upsert one dated value for a metric.
///
/// On conflict only `value` is replaced; the row id is preserved and a
/// previously stored `value_meta` is left untouched.
pub async fn upsert_observation(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    value: f64,
    metric_id: i64,
    value_meta: &JsonValue,
) -> Result<()> {
    let meta_json = serde_json::to_string(value_meta)?;

    sqlx::query(
        r#"
        INSERT INTO observations (date, value, metric_id, value_meta)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (metric_id, date) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(date)
    .bind(value)
    .bind(metric_id)
    .bind(&meta_json)
    .execute(conn)
    .await?;

    Ok(())
}

/// One row from the observations ⋈ metrics join, as exported.
#[derive(Debug, Clone)]
pub struct ObservationExport {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub metric_id: i64,
    pub metric_name: String,
}

/// Fetch all observations joined with their metric names.
pub async fn list_observations(pool: &SqlitePool) -> Result<Vec<ObservationExport>> {
    let rows = sqlx::query(
        r#"
        SELECT o.date, o.value, o.metric_id, m.name AS metric_name
        FROM observations o
        JOIN metrics m ON o.metric_id = m.id
        ORDER BY o.date ASC, m.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut observations = Vec::with_capacity(rows.len());
    for row in rows {
        observations.push(ObservationExport {
            date: row.try_get("date")?,
            value: row.try_get("value")?,
            metric_id: row.try_get("metric_id")?,
            metric_name: row.try_get("metric_name")?,
        });
    }
    Ok(observations)
}
