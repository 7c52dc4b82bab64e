//! Period Driver
//!
//! Owns the transaction boundaries. A catalog sync runs in one transaction;
//! an upload runs every period of the frame inside a single transaction and
//! commits once, so a failure anywhere undoes all periods of the run.

use sqlx::SqlitePool;
use tracing::{debug, info};

use series_model::{parse_period, Catalog, Frame};

use crate::error::Result;
use crate::materializer::{sync_catalog, SyncStats};
use crate::matcher::ingest_slice;

/// Summary of one upload run.
#[derive(Debug, Default, Clone, Copy)]
pub struct UploadReport {
    pub periods: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Materialize the whole catalog in one transaction.
pub async fn run_sync(pool: &SqlitePool, catalog: &Catalog) -> Result<SyncStats> {
    let mut tx = pool.begin().await?;
    let stats = sync_catalog(&mut *tx, catalog, None).await?;
    tx.commit().await?;

    info!(
        "Hierarchy sync complete: {} nodes, {} metrics",
        stats.nodes, stats.metrics
    );
    Ok(stats)
}

/// Ingest every distinct period of the frame, in source order, inside one
/// transaction. On any hard error the transaction is dropped and nothing
/// from any period persists.
pub async fn run_upload(pool: &SqlitePool, frame: &Frame, catalog: &Catalog) -> Result<UploadReport> {
    let mut report = UploadReport::default();
    let mut tx = pool.begin().await?;

    for token in frame.periods() {
        let date = parse_period(token)?;
        debug!("Processing period {}", date);

        let slice = frame.slice(token);
        let stats = ingest_slice(&mut *tx, &slice, catalog, date).await?;

        report.periods += 1;
        report.written += stats.written;
        report.skipped += stats.skipped;
    }

    tx.commit().await?;

    info!(
        "Upload complete: {} periods, {} values written, {} cells skipped",
        report.periods, report.written, report.skipped
    );
    Ok(report)
}
