//! Cell values and numeric normalization

/// One raw value cell from the tabular source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Type a raw CSV field the way a spreadsheet reader would: blank cells
    /// are empty, numeric-looking fields are numbers, everything else is
    /// text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            Cell::Number(n)
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    /// Normalize to a storable number.
    ///
    /// Text cells are locale-cleaned (`,` becomes `.`, `%` is dropped) and
    /// read as a percentage, so `"12,5%"` gives `0.125`. Numbers pass
    /// through unchanged. Unparseable or not-a-number values yield `None`
    /// and must not be stored.
    pub fn normalize(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(text) => {
                let cleaned = text.replace(',', ".").replace('%', "");
                cleaned.trim().parse::<f64>().ok()? / 100.0
            },
            Cell::Empty => return None,
        };
        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_percent_text_normalizes() {
        assert_eq!(Cell::Text("12,5%".to_string()).normalize(), Some(0.125));
        assert_eq!(Cell::Text("8,2%".to_string()).normalize(), Some(0.082));
    }

    #[test]
    fn test_text_without_percent_sign_still_scales() {
        // The source sheets store textual ratios as percentages either way.
        assert_eq!(Cell::Text("12,5".to_string()).normalize(), Some(0.125));
    }

    #[test]
    fn test_negative_percent() {
        assert_eq!(Cell::Text("-3,4%".to_string()).normalize(), Some(-0.034));
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(Cell::Number(0.082).normalize(), Some(0.082));
        assert_eq!(Cell::Number(-1.5).normalize(), Some(-1.5));
    }

    #[test]
    fn test_placeholders_and_garbage_drop() {
        assert_eq!(Cell::Text("-".to_string()).normalize(), None);
        assert_eq!(Cell::Text("n/a".to_string()).normalize(), None);
        assert_eq!(Cell::Empty.normalize(), None);
    }

    #[test]
    fn test_nan_drops() {
        assert_eq!(Cell::Number(f64::NAN).normalize(), None);
    }

    #[test]
    fn test_from_raw_typing() {
        assert_eq!(Cell::from_raw("  "), Cell::Empty);
        assert_eq!(Cell::from_raw("0.082"), Cell::Number(0.082));
        assert_eq!(Cell::from_raw("8,2%"), Cell::Text("8,2%".to_string()));
    }
}
