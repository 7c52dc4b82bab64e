//! Hierarchy Materializer
//!
//! Projects the catalog tree into persisted hierarchy nodes and metric
//! rows. Categories resolve-or-create by (name, parent); leaves upsert a
//! metric by name with its `dimensions` document replaced whole, so label
//! edits in the catalog propagate. Nothing is ever deleted: entries removed
//! from the catalog leave their rows behind.

use futures::future::BoxFuture;
use serde_json::json;
use sqlx::SqliteConnection;
use tracing::debug;

use series_model::{Catalog, CatalogEntry};
use series_store::{get_or_create_node, upsert_metric};

use crate::error::Result;

/// Counters for one materialization pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncStats {
    /// Category nodes resolved or created
    pub nodes: usize,
    /// Metric rows inserted or refreshed
    pub metrics: usize,
}

impl SyncStats {
    fn absorb(&mut self, other: SyncStats) {
        self.nodes += other.nodes;
        self.metrics += other.metrics;
    }
}

/// Walk one catalog level, recursing into categories.
///
/// Runs on the caller's connection; bracket the top-level call in a
/// transaction to make the whole pass all-or-nothing. Re-running on an
/// unchanged catalog creates no new rows and keeps every id stable.
pub fn sync_catalog<'a>(
    conn: &'a mut SqliteConnection,
    catalog: &'a Catalog,
    parent_id: Option<i64>,
) -> BoxFuture<'a, Result<SyncStats>> {
    Box::pin(async move {
        let mut stats = SyncStats::default();

        for (name, entry) in catalog.entries() {
            match entry {
                CatalogEntry::Category(children) => {
                    let node_id = get_or_create_node(&mut *conn, name, parent_id).await?;
                    stats.nodes += 1;
                    debug!("Category '{}' -> node {}", name, node_id);
                    stats.absorb(sync_catalog(&mut *conn, children, Some(node_id)).await?);
                },
                CatalogEntry::Metric { label } => {
                    let dimensions = json!({ "friendly_name": label });
                    let metric_id =
                        upsert_metric(&mut *conn, name, &dimensions, parent_id).await?;
                    stats.metrics += 1;
                    debug!("Metric '{}' -> id {}", name, metric_id);
                },
            }
        }

        Ok(stats)
    })
}
