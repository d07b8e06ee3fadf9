//! Trend percentage between the oldest and newest bucket.

use crate::types::DailyBucket;

/// Percentage drift in raw event volume from the first to the last bucket,
/// rounded to the nearest integer. The denominator is floored at 1 so a
/// zero-count first day cannot divide by zero. Fewer than 2 buckets is 0.
pub fn trend_percent(buckets: &[DailyBucket]) -> i32 {
  let (first, last) = match (buckets.first(), buckets.last()) {
    (Some(f), Some(l)) if buckets.len() >= 2 => (f.total_events as f64, l.total_events as f64),
    _ => return 0,
  };
  (((last - first) / first.max(1.0)) * 100.0).round() as i32
}

/// Display form with an explicit sign: "+50%", "-20%", "+0%".
pub fn trend_label(percent: i32) -> String {
  format!("{:+}%", percent)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn series(counts: &[u64]) -> Vec<DailyBucket> {
    counts
      .iter()
      .enumerate()
      .map(|(i, &total)| DailyBucket {
        day: NaiveDate::from_ymd_opt(2025, 1, 10 + i as u32).unwrap(),
        label: String::new(),
        total_events: total,
        critical_events: 0,
        hr_events: 0,
        weighted_score: 0.0,
      })
      .collect()
  }

  #[test]
  fn fifty_percent_rise() {
    assert_eq!(trend_percent(&series(&[10, 12, 8, 15])), 50);
  }

  #[test]
  fn zero_first_day_is_floored() {
    assert_eq!(trend_percent(&series(&[0, 0])), 0);
    // (3 - 0) / max(0, 1) = 300%
    assert_eq!(trend_percent(&series(&[0, 3])), 300);
  }

  #[test]
  fn short_series_is_zero() {
    assert_eq!(trend_percent(&series(&[])), 0);
    assert_eq!(trend_percent(&series(&[9])), 0);
  }

  #[test]
  fn falling_trend_is_negative() {
    assert_eq!(trend_percent(&series(&[10, 5])), -50);
  }

  #[test]
  fn label_has_explicit_sign() {
    assert_eq!(trend_label(50), "+50%");
    assert_eq!(trend_label(-20), "-20%");
    assert_eq!(trend_label(0), "+0%");
  }
}
