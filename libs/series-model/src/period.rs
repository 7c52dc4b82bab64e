//! Period token parsing

use chrono::NaiveDate;

use crate::error::{ModelError, Result};

/// Parse a 6-digit `YYYYMM` token into the first day of that month.
///
/// A malformed token is a hard error: a sheet with an unreadable period
/// axis aborts the whole upload rather than skipping rows.
pub fn parse_period(token: &str) -> Result<NaiveDate> {
    let token = token.trim();
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::InvalidPeriod(token.to_string()));
    }

    let year: i32 = token[..4]
        .parse()
        .map_err(|_| ModelError::InvalidPeriod(token.to_string()))?;
    let month: u32 = token[4..]
        .parse()
        .map_err(|_| ModelError::InvalidPeriod(token.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ModelError::InvalidPeriod(token.to_string()))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_of_month() {
        assert_eq!(
            parse_period("202301").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(
            parse_period("201912").unwrap(),
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert!(parse_period("2023").is_err());
        assert!(parse_period("2023-1").is_err());
        assert!(parse_period("202313").is_err());
        assert!(parse_period("202300").is_err());
        assert!(parse_period("abc123").is_err());
    }
}
