//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for measurement dates.
pub type Timestamp = DateTime<Utc>;

/// Parse an RFC 3339 timestamp and normalise it to UTC.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] when `value` is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|_| ValidationError::InvalidTimestamp(value.to_owned()))
}

/// Inclusive, optionally open-ended time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

impl TimeRange {
    /// A range with no bounds, matching every timestamp.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether `ts` falls within both bounds (inclusive).
    #[must_use]
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.from.is_none_or(|from| ts >= from) && self.to.is_none_or(|to| ts <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_zulu_timestamp() {
        let ts = parse_timestamp("2025-02-25T08:45:24.804Z").unwrap();
        assert_eq!(ts.timestamp_millis(), 1_740_473_124_804);
    }

    #[test]
    fn should_normalise_offset_to_utc() {
        let a = parse_timestamp("2025-02-25T09:45:24.804+01:00").unwrap();
        let b = parse_timestamp("2025-02-25T08:45:24.804Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_reject_non_rfc3339_input() {
        let result = parse_timestamp("yesterday");
        assert_eq!(
            result,
            Err(ValidationError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn should_contain_everything_when_unbounded() {
        let ts = parse_timestamp("1970-01-01T00:00:00Z").unwrap();
        assert!(TimeRange::unbounded().contains(ts));
    }

    #[test]
    fn should_include_both_bounds() {
        let from = parse_timestamp("2025-02-25T08:43:24.804Z").unwrap();
        let to = parse_timestamp("2025-02-25T08:44:24.804Z").unwrap();
        let range = TimeRange {
            from: Some(from),
            to: Some(to),
        };
        assert!(range.contains(from));
        assert!(range.contains(to));
        assert!(!range.contains(to + chrono::Duration::milliseconds(1)));
        assert!(!range.contains(from - chrono::Duration::milliseconds(1)));
    }
}
