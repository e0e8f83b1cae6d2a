use std::fmt::Display;

use chrono::NaiveDate;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a calendar date.
#[derive(Debug, Error)]
#[error("invalid date '{input}' (expected YYYY-MM-DD): {source}")]
pub struct ParseDateError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

/// Parses an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseDateError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        tracing::error!(input = %s, "invalid date: {}", e);
        ParseDateError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an optional value for display, using "—" when `None`.
pub fn opt_display<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_date_trims_whitespace() {
        assert_eq!(
            parse_date(" 2026-10-16 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("16/10/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn opt_display_uses_dash_for_none() {
        assert_eq!(opt_display(Some(3)), "3");
        assert_eq!(opt_display(None::<&str>), "—");
    }
}
