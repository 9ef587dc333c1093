//! Input validation helpers
//!
//! This module contains the parsing rules for user-supplied date, priority and
//! sort strings. The same date rule is used when loading stored records.

use crate::error::TaskError;
use crate::todo::{Priority, SortKey};
use chrono::NaiveDate;

/// Parse a due date in strict `YYYY-MM-DD` form
///
/// chrono alone accepts unpadded months and days, so the shape is checked
/// before parsing.
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or [`TaskError::MalformedDate`]
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate, TaskError> {
    let bytes = date_str.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_shaped {
        return Err(TaskError::MalformedDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TaskError::MalformedDate(date_str.to_string()))
}

/// Parse a priority name (case-insensitive)
pub fn parse_priority(priority_str: &str) -> Result<Priority, String> {
    priority_str.parse()
}

/// Parse a list sort key
pub fn parse_sort_key(sort_str: &str) -> Result<SortKey, String> {
    sort_str.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date_accepts_iso_dates() {
        assert_eq!(
            parse_due_date("2024-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert_eq!(
            parse_due_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_due_date_rejects_other_shapes() {
        for bad in [
            "",
            "2024-1-10",
            "2024-01-1",
            "10-01-2024",
            "2024/01/10",
            "2024-01-10T00:00",
            " 2024-01-10",
            "tomorrow",
        ] {
            assert_eq!(
                parse_due_date(bad),
                Err(TaskError::MalformedDate(bad.to_string())),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_due_date_rejects_impossible_dates() {
        assert!(parse_due_date("2023-02-29").is_err());
        assert!(parse_due_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert!(parse_priority("soon").is_err());
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(parse_sort_key("due_date").unwrap(), SortKey::DueDate);
        assert_eq!(parse_sort_key("priority").unwrap(), SortKey::Priority);
        assert!(parse_sort_key("title").is_err());
    }
}
