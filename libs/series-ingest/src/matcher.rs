//! Observation Matcher
//!
//! Walks the same catalog shape as the materializer, but resolves each leaf
//! against one period's frame slice and upserts dated values. Ingestion is
//! best-effort per cell: a missing cell, an unnormalizable value or a
//! not-yet-materialized metric skips that leaf. Only store failures and
//! malformed metric names abort the run.

use chrono::NaiveDate;
use futures::future::BoxFuture;
use serde_json::json;
use sqlx::SqliteConnection;
use tracing::debug;

use series_model::{Catalog, CatalogEntry, FrameSlice, MetricKey};
use series_store::{find_metric_id, upsert_observation};

use crate::error::Result;

/// Counters for one period's ingestion.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestStats {
    /// Observations written (inserted or value-replaced)
    pub written: usize,
    /// Leaves skipped (missing cell, unusable value, unknown metric)
    pub skipped: usize,
}

impl IngestStats {
    fn absorb(&mut self, other: IngestStats) {
        self.written += other.written;
        self.skipped += other.skipped;
    }
}

/// Ingest one period's slice against a catalog subtree.
///
/// The metric id lookup is re-done per run rather than cached: the
/// materializer may have run independently since the last upload.
pub fn ingest_slice<'a>(
    conn: &'a mut SqliteConnection,
    slice: &'a FrameSlice<'a>,
    catalog: &'a Catalog,
    date: NaiveDate,
) -> BoxFuture<'a, Result<IngestStats>> {
    Box::pin(async move {
        let mut stats = IngestStats::default();

        for (name, entry) in catalog.entries() {
            match entry {
                CatalogEntry::Category(children) => {
                    stats.absorb(ingest_slice(&mut *conn, slice, children, date).await?);
                },
                CatalogEntry::Metric { .. } => {
                    let key = MetricKey::parse(name)?;

                    let Some(cell) = slice.get(key.entity, key.short_name) else {
                        debug!("No cell for '{}' at {}", name, date);
                        stats.skipped += 1;
                        continue;
                    };

                    let Some(value) = cell.normalize() else {
                        debug!("Unusable cell for '{}' at {}", name, date);
                        stats.skipped += 1;
                        continue;
                    };

                    // Soft dependency on the materializer having run first.
                    let Some(metric_id) = find_metric_id(&mut *conn, name).await? else {
                        debug!("Metric '{}' not materialized, skipping", name);
                        stats.skipped += 1;
                        continue;
                    };

                    upsert_observation(&mut *conn, date, value, metric_id, &json!({})).await?;
                    stats.written += 1;
                },
            }
        }

        Ok(stats)
    })
}
