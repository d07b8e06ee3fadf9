//! Daily bucketing + weighted score accumulation.

use chrono::{DateTime, Days, FixedOffset};

use crate::config::Config;
use crate::date;
use crate::types::{DailyBucket, Event, Source};

/// Partition the trailing `config.window_days` calendar days (including
/// "today" in the reporting timezone) and accumulate each event into its day.
///
/// Events dated before the window start or after today are dropped from the
/// aggregation (they still appear in the timeline). Bucket order is ascending
/// by construction; the result is a pure function of `(events, now, config)`.
pub fn aggregate(events: &[Event], now: DateTime<FixedOffset>, config: &Config) -> Vec<DailyBucket> {
  let today = now.date_naive();
  let window = config.window_days.max(1);

  let mut buckets: Vec<DailyBucket> = (0..window)
    .filter_map(|i| today.checked_sub_days(Days::new((window - 1 - i) as u64)))
    .map(|day| DailyBucket::new(day, date::day_label(day)))
    .collect();

  for event in events {
    let day = event.occurred_at.with_timezone(now.offset()).date_naive();
    match buckets.iter_mut().find(|b| b.day == day) {
      Some(bucket) => {
        bucket.total_events += 1;
        bucket.weighted_score += event.severity.weight();
        if event.severity.is_elevated() {
          bucket.critical_events += 1;
        }
        if event.source == Source::Hr {
          bucket.hr_events += 1;
        }
      }
      None => log::debug!("event {} dated {} outside window; dropped", event.key, day),
    }
  }

  buckets
}
