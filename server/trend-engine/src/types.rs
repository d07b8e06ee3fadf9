//! Core types for the trend engine (JSON contracts + internal models).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound event from the payload array. Every field is optional; unknown
/// fields are silently ignored. An array item that fails to deserialize at all
/// degrades to `RawEvent::default()` so it still counts toward the totals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
  /// Upstream identifier (string or number); list position is the fallback key.
  #[serde(default)]
  pub id: Option<serde_json::Value>,
  #[serde(default)]
  pub source_system: Option<String>,
  #[serde(default)]
  pub severity: Option<String>,
  #[serde(default)]
  pub event_type: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub created_at: Option<String>,
  /// Secondary timestamp field some feeds use instead of created_at.
  #[serde(default)]
  pub timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// Severity enum (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
  Unknown,
  Low,
  Medium,
  High,
  Critical,
}

impl Severity {
  /// Loose parse from free text. Anything unrecognized (or absent) is Unknown,
  /// never an error.
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "low" => Self::Low,
      "medium" => Self::Medium,
      "high" => Self::High,
      "critical" => Self::Critical,
      _ => Self::Unknown,
    }
  }

  /// Ordinal weight added to a bucket's weighted score.
  pub fn weight(self) -> f64 {
    match self {
      Self::Low => 1.0,
      Self::Medium => 2.0,
      Self::High => 3.0,
      Self::Critical => 4.0,
      Self::Unknown => 1.0,
    }
  }

  /// Display label. Unknown severities render as "medium".
  pub fn label(self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium | Self::Unknown => "medium",
      Self::High => "high",
      Self::Critical => "critical",
    }
  }

  /// Critical-or-high: counts toward critical tallies and the critical tab.
  pub fn is_elevated(self) -> bool {
    matches!(self, Self::Critical | Self::High)
  }
}

// ---------------------------------------------------------------------------
// Source enum (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
  Hr,
  Finance,
  Other,
}

impl Source {
  /// The one classification path shared by aggregation, filtering, and tallies.
  pub fn classify(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "hr" => Self::Hr,
      "finance" => Self::Finance,
      _ => Self::Other,
    }
  }
}

// ---------------------------------------------------------------------------
// Timeline tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
  All,
  Critical,
  Hr,
  Finance,
}

impl Tab {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "all" => Some(Self::All),
      "critical" => Some(Self::Critical),
      "hr" => Some(Self::Hr),
      "finance" => Some(Self::Finance),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical internal event after normalization. Construction never fails;
/// missing fields get defaults and unparseable timestamps coerce to "now".
#[derive(Debug, Clone)]
pub struct Event {
  /// Upstream id rendered as a string, or the list position when absent.
  pub key: String,
  pub severity: Severity,
  pub source: Source,
  /// Raw source label, preserved verbatim for display.
  pub source_system: String,
  pub event_type: String,
  pub description: String,
  pub occurred_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Daily buckets
// ---------------------------------------------------------------------------

/// One calendar day's accumulated risk signal. Ephemeral — recomputed from the
/// event list on every call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBucket {
  /// Calendar-day identity in the reporting timezone; matching only.
  pub day: NaiveDate,
  /// Short human-readable date, e.g. "Jan 15".
  pub label: String,
  pub total_events: u64,
  pub critical_events: u64,
  pub hr_events: u64,
  pub weighted_score: f64,
}

impl DailyBucket {
  pub fn new(day: NaiveDate, label: String) -> Self {
    Self {
      day,
      label,
      total_events: 0,
      critical_events: 0,
      hr_events: 0,
      weighted_score: 0.0,
    }
  }
}

/// Empty-feed policy: what the bucket series becomes when there are no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
  /// An explicit empty series (no buckets, trend 0, empty chart).
  Empty,
  /// The fixed synthetic 6-point demo series, so the surface is never blank.
  SyntheticFallback,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Counters over the full unfiltered event list, for the summary tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatCounts {
  pub total: u64,
  pub hr: u64,
  pub finance: u64,
  pub critical: u64,
}

/// Polyline geometry for the trend chart, precomputed so the renderer stays dumb.
#[derive(Debug, Clone, Serialize)]
pub struct ChartGeometry {
  /// SVG polyline points over a 0..100 viewBox, e.g. "0,88 20,42.5 ...".
  pub points: String,
  pub x_labels: Vec<String>,
  pub max_score: f64,
}

/// One row of the chronological timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
  pub key: String,
  pub event_type: String,
  pub source_system: String,
  pub severity: String,
  pub description: String,
  pub occurred_at: String,
  /// "12m ago" / "3h ago" / "2d ago", or a short date beyond the recent window.
  pub relative_time: String,
}

/// The full dashboard snapshot: one engine call, one object.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
  pub generated_at: String,
  pub window_days: u32,
  pub tab: Tab,
  pub stats: StatCounts,
  pub trend_percent: i32,
  pub trend_label: String,
  pub buckets: Vec<DailyBucket>,
  pub chart: ChartGeometry,
  pub timeline: Vec<TimelineEntry>,
}
