//! Series Ingest - hierarchy sync and value ingestion
//!
//! The core pipeline over the series store:
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   Catalog    │────▶│ Materializer  │────▶│  hierarchy/  │
//! │  (YAML tree) │     │ (sync tables) │     │   metrics    │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │    Frame     │────▶│ Period Driver │────▶│ observations │
//! │  (CSV sheet) │     │  + Matcher    │     │              │
//! └──────────────┘     └───────────────┘     └──────────────┘
//! ```
//!
//! The materializer projects the catalog into persisted tree nodes and
//! metric rows; the matcher resolves catalog leaves against one period's
//! frame slice and upserts dated values; the period driver owns the
//! transaction boundaries so each run is all-or-nothing.

mod driver;
mod error;
mod materializer;
mod matcher;

pub use driver::{run_sync, run_upload, UploadReport};
pub use error::{IngestError, Result};
pub use materializer::{sync_catalog, SyncStats};
pub use matcher::{ingest_slice, IngestStats};
