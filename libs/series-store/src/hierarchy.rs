//! Hierarchy node repository
//!
//! Nodes are scoped-unique by (name, parent_id): siblings must have
//! distinct names, while the same name may recur under different parents.
//! Nodes are only ever inserted; removal of catalog entries leaves rows
//! behind.

use sqlx::{Row, SqliteConnection};

use crate::error::Result;

/// Resolve a node by exact (name, parent) match, inserting on miss.
///
/// `IS` gives the null-safe comparison, so a root node (no parent) matches
/// only other root nodes rather than any parent.
pub async fn get_or_create_node(
    conn: &mut SqliteConnection,
    name: &str,
    parent_id: Option<i64>,
) -> Result<i64> {
    let existing = sqlx::query("SELECT id FROM hierarchy WHERE name = ? AND parent_id IS ?")
        .bind(name)
        .bind(parent_id)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(row) = existing {
        return Ok(row.try_get("id")?);
    }

    let row = sqlx::query("INSERT INTO hierarchy (name, parent_id) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(parent_id)
        .fetch_one(conn)
        .await?;
    Ok(row.try_get("id")?)
}
