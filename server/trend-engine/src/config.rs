//! Engine configuration with sane defaults.

use crate::types::EmptyPolicy;

/// Tunable knobs for aggregation, smoothing, and display labeling.
#[derive(Debug, Clone)]
pub struct Config {
  /// Trailing calendar days in the bucket window, including today.
  pub window_days: u32,
  /// Fraction of a day's raw score carried into following days.
  pub carry_gain: f64,
  /// Decay applied to the carry when a day's own score doesn't refresh it.
  pub carry_decay: f64,
  /// Minimum displayed score, so all-zero days keep a visible line height.
  pub score_floor: f64,
  /// Timeline entries older than this many days get a calendar date label.
  pub recent_label_days: i64,
  /// What the bucket series becomes when the event list is empty.
  pub on_empty: EmptyPolicy,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      window_days: 6,
      carry_gain: 0.15,
      carry_decay: 0.35,
      score_floor: 0.6,
      recent_label_days: 7,
      on_empty: EmptyPolicy::SyntheticFallback,
    }
  }
}
