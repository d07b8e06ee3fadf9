//! Normalize inbound events into canonical internal Event models.
//!
//! Normalization is total: every RawEvent produces an Event. Missing fields
//! get defaults, unparseable timestamps coerce to the injected "now".

use chrono::{DateTime, FixedOffset, Utc};

use crate::date;
use crate::types::{Event, RawEvent, Severity, Source};

/// Normalize one raw event. `position` is the item's index in the payload
/// array, used as the display key when no upstream id is present.
pub fn normalize(raw: &RawEvent, position: usize, now: DateTime<FixedOffset>) -> Event {
  let key = match &raw.id {
    Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
    Some(serde_json::Value::Number(n)) => n.to_string(),
    _ => position.to_string(),
  };

  let severity = raw
    .severity
    .as_deref()
    .map(Severity::from_str_loose)
    .unwrap_or(Severity::Unknown);

  let source_system = raw.source_system.clone().unwrap_or_default();
  let source = Source::classify(&source_system);

  let occurred_at = coerce_time(raw, now);

  Event {
    key,
    severity,
    source,
    source_system,
    event_type: raw.event_type.clone().unwrap_or_default(),
    description: raw.description.clone().unwrap_or_default(),
    occurred_at,
  }
}

/// Normalize a whole payload, preserving list order.
pub fn normalize_all(raws: &[RawEvent], now: DateTime<FixedOffset>) -> Vec<Event> {
  raws
    .iter()
    .enumerate()
    .map(|(i, raw)| normalize(raw, i, now))
    .collect()
}

/// Timestamp fallback chain: created_at, then timestamp, then "now".
fn coerce_time(raw: &RawEvent, now: DateTime<FixedOffset>) -> DateTime<Utc> {
  let tz = *now.offset();
  for candidate in [&raw.created_at, &raw.timestamp].into_iter().flatten() {
    match date::parse_event_time(candidate, &tz) {
      Some(t) => return t,
      None => log::debug!("unparseable event timestamp {:?}; trying fallback", candidate),
    }
  }
  now.with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
      .unwrap()
      .with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
      .unwrap()
  }

  #[test]
  fn defaults_for_empty_raw_event() {
    let event = normalize(&RawEvent::default(), 3, now());
    assert_eq!(event.key, "3");
    assert_eq!(event.severity, Severity::Unknown);
    assert_eq!(event.source, Source::Other);
    assert_eq!(event.source_system, "");
    assert_eq!(event.event_type, "");
    assert_eq!(event.occurred_at, now().with_timezone(&Utc));
  }

  #[test]
  fn upstream_id_wins_over_position() {
    let raw = RawEvent {
      id: Some(serde_json::json!("evt-42")),
      ..Default::default()
    };
    assert_eq!(normalize(&raw, 0, now()).key, "evt-42");

    let raw = RawEvent {
      id: Some(serde_json::json!(17)),
      ..Default::default()
    };
    assert_eq!(normalize(&raw, 0, now()).key, "17");
  }

  #[test]
  fn severity_and_source_are_classified() {
    let raw = RawEvent {
      source_system: Some("HR".into()),
      severity: Some("Critical".into()),
      ..Default::default()
    };
    let event = normalize(&raw, 0, now());
    assert_eq!(event.severity, Severity::Critical);
    assert_eq!(event.source, Source::Hr);
    // Raw label preserved verbatim for display.
    assert_eq!(event.source_system, "HR");
  }

  #[test]
  fn timestamp_field_is_the_fallback() {
    let raw = RawEvent {
      created_at: Some("garbage".into()),
      timestamp: Some("2025-01-14T08:00:00Z".into()),
      ..Default::default()
    };
    let event = normalize(&raw, 0, now());
    assert_eq!(
      event.occurred_at,
      Utc.with_ymd_and_hms(2025, 1, 14, 8, 0, 0).unwrap()
    );
  }

  #[test]
  fn both_timestamps_unparseable_coerces_to_now() {
    let raw = RawEvent {
      created_at: Some("nope".into()),
      timestamp: Some("also nope".into()),
      ..Default::default()
    };
    let event = normalize(&raw, 0, now());
    assert_eq!(event.occurred_at, now().with_timezone(&Utc));
  }

  #[test]
  fn normalize_all_keeps_order_and_positions() {
    let raws = vec![
      RawEvent {
        severity: Some("low".into()),
        ..Default::default()
      },
      RawEvent {
        severity: Some("high".into()),
        ..Default::default()
      },
    ];
    let events = normalize_all(&raws, now());
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].key, "0");
    assert_eq!(events[0].severity, Severity::Low);
    assert_eq!(events[1].key, "1");
    assert_eq!(events[1].severity, Severity::High);
  }
}
