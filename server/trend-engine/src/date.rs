//! Timestamp coercion and date label helpers.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Parse an event timestamp. Tries RFC3339 first, then a naive datetime
/// interpreted in the reporting timezone, then a bare date at local midnight.
/// Returns None when nothing matches; the caller substitutes "now".
pub fn parse_event_time(s: &str, tz: &FixedOffset) -> Option<DateTime<Utc>> {
  let s = s.trim();
  if s.is_empty() {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }

  for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
      return local_to_utc(naive, tz);
    }
  }

  if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return local_to_utc(d.and_hms_opt(0, 0, 0)?, tz);
  }

  None
}

fn local_to_utc(naive: NaiveDateTime, tz: &FixedOffset) -> Option<DateTime<Utc>> {
  // Fixed offsets have no DST gaps, so single() always resolves.
  naive
    .and_local_timezone(*tz)
    .single()
    .map(|dt| dt.with_timezone(&Utc))
}

/// Short human-readable date, e.g. "Jan 15".
pub fn day_label(day: NaiveDate) -> String {
  use chrono::Datelike;
  format!("{} {}", day.format("%b"), day.day())
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
  }

  #[test]
  fn rfc3339_parses_with_offset() {
    let t = parse_event_time("2025-01-15T10:30:00+02:00", &utc()).unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap());
  }

  #[test]
  fn naive_datetime_uses_reporting_timezone() {
    let tz = FixedOffset::east_opt(3600).unwrap();
    let t = parse_event_time("2025-01-15T10:30:00", &tz).unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap());
  }

  #[test]
  fn bare_date_is_local_midnight() {
    let t = parse_event_time("2025-01-15", &utc()).unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
  }

  #[test]
  fn garbage_is_none() {
    assert!(parse_event_time("not-a-date", &utc()).is_none());
    assert!(parse_event_time("", &utc()).is_none());
    assert!(parse_event_time("   ", &utc()).is_none());
  }

  #[test]
  fn day_label_format() {
    let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(day_label(d), "Jan 15");
    let d = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
    assert_eq!(day_label(d), "Dec 3");
  }
}
