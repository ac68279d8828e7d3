use chrono::NaiveDate;
use std::cmp::Ordering;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Compares two `YYYY-MM-DD` date strings.
///
/// If either side fails strict parsing the two are treated as equal.
/// Filter dates are validated at query-parse time, so through the query
/// path only an externally constructed task due date can hit that branch.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_dates, parse_date};
    use std::cmp::Ordering;

    #[test]
    fn compare_orders_valid_dates() {
        assert_eq!(compare_dates("2024-01-14", "2024-01-15"), Ordering::Less);
        assert_eq!(compare_dates("2024-01-15", "2024-01-14"), Ordering::Greater);
        assert_eq!(compare_dates("2024-01-15", "2024-01-15"), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let a = "2023-12-31";
        let b = "2024-01-01";
        assert_eq!(compare_dates(a, b), compare_dates(b, a).reverse());
    }

    #[test]
    fn compare_treats_unparsable_as_equal() {
        assert_eq!(compare_dates("not-a-date", "2024-01-15"), Ordering::Equal);
        assert_eq!(compare_dates("2024-01-15", "2024-13-45"), Ordering::Equal);
        assert_eq!(compare_dates("", ""), Ordering::Equal);
    }

    #[test]
    fn parse_date_rejects_invalid_calendar_dates() {
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("2024-01-32").is_none());
    }
}
