//! RiskLens Temporal Risk Aggregation Engine — deterministic, rule-based.
//!
//! Turns an unordered list of operational events into a dashboard snapshot:
//! daily risk buckets over a trailing window, a carry-forward-smoothed
//! weighted-score series, a trend percentage, chart geometry, summary-tile
//! counters, and a filtered chronological timeline.
//!
//! No AI, no DB, no network; pure computation over an in-memory event list.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod smooth;
pub mod stats;
pub mod timeline;
pub mod trend;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{EmptyPolicy, RawEvent, Snapshot, Tab};
