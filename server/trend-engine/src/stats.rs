//! Aggregate counters for the dashboard's summary tiles.

use crate::types::{Event, Source, StatCounts};

/// Count over the full unfiltered list, regardless of the active tab.
/// `total` is the list length, so degraded all-defaults events still count.
pub fn tally(events: &[Event]) -> StatCounts {
  let mut counts = StatCounts {
    total: events.len() as u64,
    ..Default::default()
  };
  for event in events {
    match event.source {
      Source::Hr => counts.hr += 1,
      Source::Finance => counts.finance += 1,
      Source::Other => {}
    }
    if event.severity.is_elevated() {
      counts.critical += 1;
    }
  }
  counts
}
