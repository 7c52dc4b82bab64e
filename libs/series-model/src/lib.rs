//! Series Model - catalog and tabular input types
//!
//! In-memory model of the two ingestion inputs:
//! - The catalog: a nested category tree whose leaves declare metrics by
//!   their globally-unique three-part name, parsed from YAML.
//! - The frame: a CSV-loaded value sheet addressable by
//!   `(period, entity, metric)`.
//!
//! Plus the small pure helpers shared by the ingestion pipeline: metric-name
//! parsing, cell normalization and period-token parsing.

mod catalog;
mod cell;
mod error;
mod frame;
mod key;
mod period;

pub use catalog::{Catalog, CatalogEntry};
pub use cell::Cell;
pub use error::{ModelError, Result};
pub use frame::{Frame, FrameRow, FrameSlice};
pub use key::MetricKey;
pub use period::parse_period;
