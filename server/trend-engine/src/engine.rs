//! Snapshot assembly: one call runs the full pipeline over a payload.

use chrono::{DateTime, FixedOffset};

use crate::aggregate;
use crate::chart;
use crate::config::Config;
use crate::fallback;
use crate::normalize;
use crate::smooth;
use crate::stats;
use crate::timeline;
use crate::trend;
use crate::types::{EmptyPolicy, RawEvent, Snapshot, Tab};

/// The trend engine. Holds only configuration; every snapshot call is an
/// independent pure transform of its inputs.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Run the full pipeline: normalize, bucket + accumulate (or the configured
  /// empty-feed series), smooth, trend, chart, tally, timeline.
  pub fn snapshot(&self, raw_events: &[RawEvent], tab: Tab, now: DateTime<FixedOffset>) -> Snapshot {
    let events = normalize::normalize_all(raw_events, now);

    let buckets = if events.is_empty() {
      match self.config.on_empty {
        EmptyPolicy::Empty => Vec::new(),
        EmptyPolicy::SyntheticFallback => fallback::synthetic_series(),
      }
    } else {
      let mut buckets = aggregate::aggregate(&events, now, &self.config);
      smooth::smooth(&mut buckets, &self.config);
      buckets
    };

    let trend_percent = trend::trend_percent(&buckets);

    Snapshot {
      generated_at: now.to_rfc3339(),
      window_days: self.config.window_days,
      tab,
      stats: stats::tally(&events),
      trend_percent,
      trend_label: trend::trend_label(trend_percent),
      chart: chart::geometry(&buckets),
      buckets,
      timeline: timeline::entries(&events, tab, now, &self.config),
    }
  }

  /// Input boundary guard: the payload is expected to be a JSON array of
  /// event objects. A non-array value becomes an empty list; an array item
  /// that is not event-shaped degrades to an all-defaults event so the
  /// counters still reflect the list length.
  pub fn snapshot_from_value(&self, payload: &serde_json::Value, tab: Tab, now: DateTime<FixedOffset>) -> Snapshot {
    let raw_events: Vec<RawEvent> = match payload.as_array() {
      Some(items) => items
        .iter()
        .enumerate()
        .map(|(i, item)| {
          serde_json::from_value(item.clone()).unwrap_or_else(|e| {
            log::warn!("payload item {} is not event-shaped ({}); using defaults", i, e);
            RawEvent::default()
          })
        })
        .collect(),
      None => {
        if !payload.is_null() {
          log::warn!("payload is not an array; treating as empty event list");
        }
        Vec::new()
      }
    };
    self.snapshot(&raw_events, tab, now)
  }
}
