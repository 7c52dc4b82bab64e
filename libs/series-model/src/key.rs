//! Metric name parsing
//!
//! A leaf metric's name encodes `<namespace>.<metric_short_name>.<entity_code>`.
//! The short name and entity code form the composite lookup key into the
//! tabular frame.

use crate::error::{ModelError, Result};

/// Parsed three-part metric name. Borrows from the original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricKey<'a> {
    pub namespace: &'a str,
    pub short_name: &'a str,
    pub entity: &'a str,
}

impl<'a> MetricKey<'a> {
    /// Split a metric name on `.` into exactly three non-empty parts.
    pub fn parse(name: &'a str) -> Result<Self> {
        let mut parts = name.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(short_name), Some(entity), None)
                if !namespace.is_empty() && !short_name.is_empty() && !entity.is_empty() =>
            {
                Ok(Self {
                    namespace,
                    short_name,
                    entity,
                })
            },
            _ => Err(ModelError::InvalidMetricName(name.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_parts() {
        let key = MetricKey::parse("kri.ROE.ES").unwrap();
        assert_eq!(key.namespace, "kri");
        assert_eq!(key.short_name, "ROE");
        assert_eq!(key.entity, "ES");
    }

    #[test]
    fn test_wrong_part_count_rejected() {
        assert!(MetricKey::parse("kri.ROE").is_err());
        assert!(MetricKey::parse("kri.ROE.ES.extra").is_err());
        assert!(MetricKey::parse("plain").is_err());
    }

    #[test]
    fn test_empty_part_rejected() {
        assert!(MetricKey::parse("kri..ES").is_err());
        assert!(MetricKey::parse(".ROE.ES").is_err());
        assert!(MetricKey::parse("kri.ROE.").is_err());
    }
}
