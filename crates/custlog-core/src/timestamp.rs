//! Parsing of the timestamp and date spellings found in audit rows

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Naive date-time layouts, tried in order
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Offset-carrying layouts that RFC 3339 parsing rejects
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];

const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.",
    "ธ.ค.",
];

/// Buddhist era is the Gregorian year plus 543
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// A parsed date-like value: either a calendar date or an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLike {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl DateLike {
    /// Absolute instant; a bare date means midnight at `offset`
    pub fn to_instant(&self, offset: FixedOffset) -> Option<DateTime<Utc>> {
        match self {
            DateLike::DateTime(dt) => Some(*dt),
            DateLike::Date(date) => date
                .and_hms_opt(0, 0, 0)
                .and_then(|naive| at_offset(naive, offset)),
        }
    }

    /// Thai medium style, e.g. `5 มี.ค. 2567` or `5 มี.ค. 2567 14:30`
    pub fn format_thai(&self, offset: FixedOffset) -> String {
        match self {
            DateLike::Date(date) => thai_date(*date),
            DateLike::DateTime(dt) => {
                let local = dt.with_timezone(&offset);
                format!(
                    "{} {:02}:{:02}",
                    thai_date(local.date_naive()),
                    local.hour(),
                    local.minute()
                )
            }
        }
    }
}

fn thai_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    let month = THAI_MONTHS_SHORT[date.month0() as usize];
    format!(
        "{} {} {}",
        date.day(),
        month,
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

fn at_offset(naive: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// True when the string starts with a `YYYY-MM-DD` prefix
fn has_date_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a date or date-time string
///
/// Naive date-times are read in `offset`. Strings without a leading
/// `YYYY-MM-DD` are never treated as dates.
pub fn parse_date_like(s: &str, offset: FixedOffset) -> Option<DateLike> {
    let s = s.trim();
    if !has_date_prefix(s) {
        return None;
    }
    if s.len() == 10 {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(DateLike::Date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(DateLike::DateTime(dt.with_timezone(&Utc)));
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(DateLike::DateTime(dt.with_timezone(&Utc)));
        }
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .and_then(|naive| at_offset(naive, offset))
        .map(DateLike::DateTime)
}

/// Parse an audit row timestamp into an absolute instant
pub fn parse_instant(s: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    parse_date_like(s, offset).and_then(|d| d.to_instant(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bangkok() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn test_rfc3339_keeps_its_own_offset() {
        let dt = parse_instant("2024-03-05T10:00:00Z", bangkok()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-05T10:00:00+00:00");
    }

    #[test]
    fn test_naive_timestamp_uses_policy_offset() {
        let dt = parse_instant("2024-03-05 10:00:00", bangkok()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-05T03:00:00+00:00");

        let dt = parse_instant("2024-03-05T10:00:00.250", bangkok()).unwrap();
        assert_eq!(dt.timestamp_millis() % 1000, 250);
    }

    #[test]
    fn test_bare_date_is_local_midnight() {
        let dt = parse_instant("2024-03-05", bangkok()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-04T17:00:00+00:00");
    }

    #[test]
    fn test_rejects_non_dates() {
        assert!(parse_instant("yesterday", bangkok()).is_none());
        assert!(parse_instant("2024-13-45", bangkok()).is_none());
        assert!(parse_date_like("0812345678", bangkok()).is_none());
        assert!(parse_date_like("", bangkok()).is_none());
    }

    #[test]
    fn test_format_thai() {
        let date = parse_date_like("2024-03-05", bangkok()).unwrap();
        assert_eq!(date.format_thai(bangkok()), "5 มี.ค. 2567");

        let dt = parse_date_like("2024-03-05T07:30:00Z", bangkok()).unwrap();
        assert_eq!(dt.format_thai(bangkok()), "5 มี.ค. 2567 14:30");
    }
}
