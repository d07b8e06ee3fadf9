//! Polyline geometry for the trend chart (0..100 viewBox).

use crate::types::{ChartGeometry, DailyBucket};

const TOP_PADDING: f64 = 6.0;
const BOTTOM_PADDING: f64 = 12.0;

/// Map the smoothed series onto the viewBox: x evenly spaced over 0..100
/// (a single point sits at 0), y top-padded against the series maximum.
/// Coordinates are rounded to 2 decimals to keep the points string compact.
pub fn geometry(buckets: &[DailyBucket]) -> ChartGeometry {
  let max_score = buckets
    .iter()
    .map(|b| b.weighted_score)
    .fold(0.0_f64, f64::max);

  let points = buckets
    .iter()
    .enumerate()
    .map(|(i, b)| format!("{},{}", x_position(i, buckets.len()), y_position(b.weighted_score, max_score)))
    .collect::<Vec<_>>()
    .join(" ");

  ChartGeometry {
    points,
    x_labels: buckets.iter().map(|b| b.label.clone()).collect(),
    max_score,
  }
}

fn x_position(index: usize, len: usize) -> f64 {
  if len <= 1 {
    return 0.0;
  }
  let step = 100.0 / (len - 1) as f64;
  round2(index as f64 * step)
}

fn y_position(score: f64, max: f64) -> f64 {
  let height = 100.0 - TOP_PADDING - BOTTOM_PADDING;
  let ratio = (score / max.max(1.0)).min(1.0);
  round2(TOP_PADDING + (1.0 - ratio) * height)
}

fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}
