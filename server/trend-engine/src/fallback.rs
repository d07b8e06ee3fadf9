//! Synthetic demo series for empty feeds.

use chrono::{Days, NaiveDate};

use crate::types::DailyBucket;

/// (label, total, critical, hr, weighted_score) per point.
const POINTS: [(&str, u64, u64, u64, f64); 6] = [
  ("Mon", 2, 0, 1, 3.0),
  ("Tue", 1, 0, 0, 2.0),
  ("Wed", 3, 1, 1, 6.0),
  ("Thu", 2, 0, 1, 4.0),
  ("Fri", 4, 2, 2, 11.0),
  ("Sat", 3, 1, 1, 7.0),
];

/// The fixed 6-point series shown when the feed is empty and the configured
/// policy is SyntheticFallback. Anchored to a fixed Monday-starting week so
/// every call returns the identical series; it is a demo asset, not a window
/// derivative, and stays 6 points even when `window_days` is overridden.
pub fn synthetic_series() -> Vec<DailyBucket> {
  // 2024-01-01 is a Monday.
  let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
  POINTS
    .iter()
    .enumerate()
    .map(|(i, &(label, total, critical, hr, score))| DailyBucket {
      day: monday
        .checked_add_days(Days::new(i as u64))
        .unwrap_or(monday),
      label: label.to_string(),
      total_events: total,
      critical_events: critical,
      hr_events: hr,
      weighted_score: score,
    })
    .collect()
}
