//! Carry-forward smoothing of the bucket series.

use crate::config::Config;
use crate::types::DailyBucket;

/// Single left-to-right pass: each day's displayed score is its raw score plus
/// a decaying carry from earlier days, floored at `max(total_events,
/// score_floor)` so all-zero days keep a visible height.
///
/// The carry is refreshed from each day's raw score before the floor applies,
/// so a spike's influence decays geometrically instead of vanishing the next
/// day. Must run exactly once per aggregation, on raw scores — it is not
/// idempotent, and reapplying it to its own output inflates the series.
pub fn smooth(buckets: &mut [DailyBucket], config: &Config) {
  let mut carry = 0.0_f64;
  for bucket in buckets {
    let raw = bucket.weighted_score;
    let adjusted = raw + carry;
    carry = (raw * config.carry_gain).max(carry * config.carry_decay);
    bucket.weighted_score = adjusted.max((bucket.total_events as f64).max(config.score_floor));
  }
}
