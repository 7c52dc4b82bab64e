//! Series Store - SQLite persistence layer
//!
//! Owns the store schema and the row repositories for the three persisted
//! types:
//! - `hierarchy`: category tree nodes, scoped-unique by (name, parent)
//! - `metrics`: globally-unique named series definitions
//! - `observations`: dated values, one per (metric, date)
//!
//! Repository functions take `&mut SqliteConnection` so they compose inside
//! a caller-owned transaction; the ingestion layer brackets whole runs in
//! one transaction.

mod client;
mod error;
mod hierarchy;
mod metric;
mod observation;
mod schema;

pub use client::{SqliteClient, SqlitePool};
pub use error::{Result, StoreError};
pub use hierarchy::get_or_create_node;
pub use metric::{find_metric_id, upsert_metric};
pub use observation::{list_observations, upsert_observation, ObservationExport};
pub use schema::{init_schema, table_counts, StoreCounts};
