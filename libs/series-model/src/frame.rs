//! Tabular source frame
//!
//! A frame is the CSV-loaded value sheet: one row per
//! `(period, entity, metric)` with a single value column. The ingestion
//! pipeline asks it for the distinct periods in source order, then for a
//! per-period slice indexed by `(entity, metric)`.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::cell::Cell;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct RawRow {
    period: String,
    entity: String,
    metric: String,
    #[serde(default)]
    value: String,
}

/// One typed frame row.
#[derive(Debug, Clone)]
pub struct FrameRow {
    pub period: String,
    pub entity: String,
    pub metric: String,
    pub value: Cell,
}

/// The full tabular source.
#[derive(Debug, Default)]
pub struct Frame {
    rows: Vec<FrameRow>,
}

impl Frame {
    /// Load a frame from a CSV file with `period,entity,metric,value`
    /// columns.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::collect(csv::Reader::from_path(path)?)
    }

    /// Load a frame from any CSV reader.
    pub fn from_csv_reader(input: impl Read) -> Result<Self> {
        Self::collect(csv::Reader::from_reader(input))
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut rows = Vec::new();
        for record in reader.deserialize::<RawRow>() {
            let raw = record?;
            rows.push(FrameRow {
                period: raw.period.trim().to_string(),
                entity: raw.entity.trim().to_string(),
                metric: raw.metric.trim().to_string(),
                value: Cell::from_raw(&raw.value),
            });
        }
        Ok(Self { rows })
    }

    /// Distinct period tokens in source order (not sorted).
    pub fn periods(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut periods = Vec::new();
        for row in &self.rows {
            if seen.insert(row.period.as_str()) {
                periods.push(row.period.as_str());
            }
        }
        periods
    }

    /// Index one period's rows by `(entity, metric)`.
    ///
    /// Duplicate keys within a period keep the last row, matching a
    /// spreadsheet index rebuild.
    pub fn slice(&self, period: &str) -> FrameSlice<'_> {
        let mut index = HashMap::new();
        for row in self.rows.iter().filter(|row| row.period == period) {
            index.insert((row.entity.as_str(), row.metric.as_str()), &row.value);
        }
        FrameSlice { index }
    }

    /// Total row count.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One period's rows, addressable by `(entity_code, metric_short_name)`.
#[derive(Debug)]
pub struct FrameSlice<'a> {
    index: HashMap<(&'a str, &'a str), &'a Cell>,
}

impl<'a> FrameSlice<'a> {
    /// Look up the cell for one entity/metric pair.
    pub fn get(&self, entity: &str, metric: &str) -> Option<&'a Cell> {
        self.index.get(&(entity, metric)).copied()
    }

    /// Number of addressable cells in this slice.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when this period has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    const SAMPLE: &str = "\
period,entity,metric,value
202303,ES,ROE,\"8,2%\"
202303,DE,ROE,0.061
202212,ES,ROE,\"7,9%\"
202303,ES,CET1,-
";

    #[test]
    fn test_periods_in_source_order() {
        let frame = Frame::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(frame.periods(), vec!["202303", "202212"]);
    }

    #[test]
    fn test_slice_lookup() {
        let frame = Frame::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        let slice = frame.slice("202303");
        assert_eq!(slice.len(), 3);
        assert_eq!(
            slice.get("ES", "ROE"),
            Some(&Cell::Text("8,2%".to_string()))
        );
        assert_eq!(slice.get("DE", "ROE"), Some(&Cell::Number(0.061)));
        assert_eq!(slice.get("FR", "ROE"), None);

        let older = frame.slice("202212");
        assert_eq!(older.len(), 1);
        assert_eq!(
            older.get("ES", "ROE"),
            Some(&Cell::Text("7,9%".to_string()))
        );
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::from_csv_reader("period,entity,metric,value\n".as_bytes()).unwrap();
        assert!(frame.is_empty());
        assert!(frame.periods().is_empty());
    }
}
