//! Timeline filtering, ordering, and relative-time labels.

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::Config;
use crate::date;
use crate::types::{Event, Source, Tab, TimelineEntry};

/// Filter by tab and sort descending by occurrence time (most recent first).
/// The sort is stable, so ties keep input order. The input list is untouched.
pub fn filter_and_sort(events: &[Event], tab: Tab) -> Vec<Event> {
  let mut out: Vec<Event> = events
    .iter()
    .filter(|e| match tab {
      Tab::All => true,
      Tab::Critical => e.severity.is_elevated(),
      Tab::Hr => e.source == Source::Hr,
      Tab::Finance => e.source == Source::Finance,
    })
    .cloned()
    .collect();
  out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
  out
}

/// "12m ago" under an hour, "3h ago" under a day, "2d ago" under
/// `recent_label_days`, then a short calendar date. Future-dated events clamp
/// to "0m ago".
pub fn relative_time(occurred_at: DateTime<Utc>, now: DateTime<FixedOffset>, config: &Config) -> String {
  let elapsed = now.signed_duration_since(occurred_at);
  let mins = elapsed.num_minutes().max(0);
  if mins < 60 {
    return format!("{}m ago", mins);
  }
  let hours = elapsed.num_hours();
  if hours < 24 {
    return format!("{}h ago", hours);
  }
  let days = elapsed.num_days();
  if days < config.recent_label_days {
    return format!("{}d ago", days);
  }
  date::day_label(occurred_at.with_timezone(now.offset()).date_naive())
}

/// Build the display rows for the active tab.
pub fn entries(events: &[Event], tab: Tab, now: DateTime<FixedOffset>, config: &Config) -> Vec<TimelineEntry> {
  filter_and_sort(events, tab)
    .into_iter()
    .map(|e| TimelineEntry {
      key: e.key,
      event_type: e.event_type,
      source_system: e.source_system,
      severity: e.severity.label().to_string(),
      description: e.description,
      occurred_at: e.occurred_at.to_rfc3339(),
      relative_time: relative_time(e.occurred_at, now, config),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Severity, Source};
  use chrono::TimeZone;

  fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
      .unwrap()
      .with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
      .unwrap()
  }

  fn event(key: &str, severity: Severity, source: Source, mins_ago: i64) -> Event {
    Event {
      key: key.into(),
      severity,
      source,
      source_system: String::new(),
      event_type: String::new(),
      description: String::new(),
      occurred_at: now().with_timezone(&Utc) - chrono::Duration::minutes(mins_ago),
    }
  }

  #[test]
  fn critical_tab_keeps_critical_and_high_newest_first() {
    let events = vec![
      event("a", Severity::Critical, Source::Hr, 30),
      event("b", Severity::Low, Source::Hr, 5),
      event("c", Severity::High, Source::Finance, 10),
      event("d", Severity::Medium, Source::Other, 1),
    ];
    let keys: Vec<_> = filter_and_sort(&events, Tab::Critical)
      .into_iter()
      .map(|e| e.key)
      .collect();
    assert_eq!(keys, ["c", "a"]);
  }

  #[test]
  fn source_tabs_match_classified_source() {
    let events = vec![
      event("a", Severity::Low, Source::Hr, 1),
      event("b", Severity::Low, Source::Finance, 2),
      event("c", Severity::Low, Source::Other, 3),
    ];
    assert_eq!(filter_and_sort(&events, Tab::Hr).len(), 1);
    assert_eq!(filter_and_sort(&events, Tab::Finance).len(), 1);
    assert_eq!(filter_and_sort(&events, Tab::All).len(), 3);
  }

  #[test]
  fn ties_keep_input_order() {
    let events = vec![
      event("first", Severity::Low, Source::Other, 10),
      event("second", Severity::Low, Source::Other, 10),
    ];
    let keys: Vec<_> = filter_and_sort(&events, Tab::All)
      .into_iter()
      .map(|e| e.key)
      .collect();
    assert_eq!(keys, ["first", "second"]);
  }

  #[test]
  fn relative_time_buckets() {
    let config = Config::default();
    let at = |mins: i64| now().with_timezone(&Utc) - chrono::Duration::minutes(mins);
    assert_eq!(relative_time(at(12), now(), &config), "12m ago");
    assert_eq!(relative_time(at(3 * 60), now(), &config), "3h ago");
    assert_eq!(relative_time(at(2 * 24 * 60), now(), &config), "2d ago");
    assert_eq!(relative_time(at(10 * 24 * 60), now(), &config), "Jan 5");
  }

  #[test]
  fn future_event_clamps_to_zero_minutes() {
    let config = Config::default();
    let future = now().with_timezone(&Utc) + chrono::Duration::minutes(30);
    assert_eq!(relative_time(future, now(), &config), "0m ago");
  }

  #[test]
  fn entries_use_display_severity_labels() {
    let events = vec![event("a", Severity::Unknown, Source::Other, 5)];
    let rows = entries(&events, Tab::All, now(), &Config::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].severity, "medium");
    assert_eq!(rows[0].relative_time, "5m ago");
  }
}
