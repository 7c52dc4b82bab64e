//! Catalog model - the nested category/metric taxonomy
//!
//! Inner YAML mappings denote categories; scalar leaves declare metrics
//! whose key is the metric's globally-unique name and whose value is a
//! human-readable label. The tagged [`CatalogEntry`] variant replaces
//! run-time shape inspection so the materializer and the matcher share one
//! typed walk.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{ModelError, Result};

/// One catalog entry: a nested category or a leaf metric declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    /// A category containing further entries
    Category(Catalog),
    /// A metric leaf with its display label
    Metric { label: String },
}

/// An ordered catalog level. Entry order follows the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    entries: Vec<(String, CatalogEntry)>,
}

impl Catalog {
    /// Parse a catalog from a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(input)?;
        match doc {
            Value::Mapping(map) => Self::from_mapping(&map),
            Value::Null => Ok(Self::default()),
            _ => Err(ModelError::InvalidCatalog(
                "document root must be a mapping".to_string(),
            )),
        }
    }

    /// Parse a catalog from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn from_mapping(map: &serde_yaml::Mapping) -> Result<Self> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let name = key
                .as_str()
                .ok_or_else(|| {
                    ModelError::InvalidCatalog(format!("non-string key: {:?}", key))
                })?
                .to_string();

            let entry = match value {
                Value::Mapping(children) => CatalogEntry::Category(Self::from_mapping(children)?),
                Value::String(label) => CatalogEntry::Metric {
                    label: label.clone(),
                },
                Value::Number(n) => CatalogEntry::Metric {
                    label: n.to_string(),
                },
                Value::Bool(b) => CatalogEntry::Metric {
                    label: b.to_string(),
                },
                Value::Null => CatalogEntry::Metric {
                    label: String::new(),
                },
                _ => {
                    return Err(ModelError::InvalidCatalog(format!(
                        "entry '{}' must be a mapping or a scalar label",
                        name
                    )))
                },
            };
            entries.push((name, entry));
        }
        Ok(Self { entries })
    }

    /// Iterate entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
