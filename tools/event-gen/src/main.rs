//! event-gen: canned operational-event payloads for the trend engine
//!
//! Usage:
//!   event-gen <scenario> [--now <RFC3339>] [--pretty]
//!
//! Scenarios:
//!   hr        One medium HR hiring-delay event
//!   finance   One high finance invoice-approval-delay event
//!   critical  One critical cross-system chain-reaction event
//!   week      A mixed trailing-week feed (all three plus filler)
//!
//! Emits a JSON event array on stdout, ready to pipe into `trend-engine`.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde_json::{json, Value};
use std::env;
use std::process;

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  let pretty = args.iter().any(|a| a == "--pretty");

  let mut now: DateTime<FixedOffset> = Utc::now().fixed_offset();
  if let Some(pos) = args.iter().position(|a| a == "--now") {
    let value = args.get(pos + 1).unwrap_or_else(|| {
      eprintln!("event-gen: --now requires a value");
      process::exit(2);
    });
    now = DateTime::parse_from_rfc3339(value).unwrap_or_else(|e| {
      eprintln!("event-gen: --now: invalid RFC3339: {}", e);
      process::exit(2);
    });
  }

  let scenario = args.iter().find(|a| !a.starts_with("--") && Some(a.as_str()) != flag_values(&args));
  let events = match scenario.map(|s| s.as_str()) {
    Some("hr") => vec![hr_event(now)],
    Some("finance") => vec![finance_event(now)],
    Some("critical") => vec![critical_event(now)],
    Some("week") => week_feed(now),
    _ => {
      eprintln!("Usage: event-gen <hr|finance|critical|week> [--now <RFC3339>] [--pretty]");
      process::exit(2);
    }
  };

  let payload = Value::Array(events);
  let out = if pretty {
    serde_json::to_string_pretty(&payload)
  } else {
    serde_json::to_string(&payload)
  };
  match out {
    Ok(s) => println!("{}", s),
    Err(e) => {
      eprintln!("event-gen: serialize: {}", e);
      process::exit(1);
    }
  }
}

/// The value following --now, so the scenario scan can skip it.
fn flag_values(args: &[String]) -> Option<&str> {
  args
    .iter()
    .position(|a| a == "--now")
    .and_then(|pos| args.get(pos + 1))
    .map(|s| s.as_str())
}

fn hr_event(at: DateTime<FixedOffset>) -> Value {
  json!({
    "source_system": "hr",
    "event_type": "Hiring Delay",
    "severity": "medium",
    "description": "Hiring freeze delayed warehouse onboarding by 14 days",
    "created_at": at.to_rfc3339(),
    "raw_json": {
      "team": "Fulfillment",
      "delay_days": 14,
      "reason": "Budget approval pending",
      "positions_affected": 3,
      "impact": "Q2 fulfillment capacity reduced by 12%"
    }
  })
}

fn finance_event(at: DateTime<FixedOffset>) -> Value {
  json!({
    "source_system": "finance",
    "event_type": "Invoice Approval Delay",
    "severity": "high",
    "description": "Invoice approval delay for Tier-1 packaging supplier",
    "created_at": at.to_rfc3339(),
    "raw_json": {
      "vendor": "PackRight Ltd",
      "invoice_amount": 184750,
      "delay_days": 7,
      "risk_level": "Service level downgrade if not resolved within 48 hours"
    }
  })
}

fn critical_event(at: DateTime<FixedOffset>) -> Value {
  json!({
    "source_system": "hr",
    "event_type": "Critical Chain Reaction Detected",
    "severity": "critical",
    "description": "Cascading risk: HR hiring delay + Finance payment delay = projected 18% fulfillment capacity reduction within 3 weeks",
    "created_at": at.to_rfc3339(),
    "raw_json": {
      "affected_systems": ["hr", "finance"],
      "projected_impact": "18% fulfillment capacity reduction",
      "timeline": "3 weeks",
      "intervention_required": true,
      "risk_factors": [
        "Warehouse staffing shortage",
        "Supplier payment delays",
        "Inventory buffer depletion"
      ]
    }
  })
}

/// A mixed trailing week: the three scenarios spread over recent days plus
/// low-grade filler, oldest first.
fn week_feed(now: DateTime<FixedOffset>) -> Vec<Value> {
  let days_ago = |d: i64, h: i64| now - Duration::days(d) - Duration::hours(h);
  vec![
    json!({
      "source_system": "finance",
      "event_type": "Expense Report Backlog",
      "severity": "low",
      "description": "Expense report queue exceeded 40 items",
      "created_at": days_ago(5, 3).to_rfc3339()
    }),
    hr_event(days_ago(4, 1)),
    json!({
      "source_system": "hr",
      "event_type": "Overtime Spike",
      "severity": "medium",
      "description": "Warehouse overtime hours up 22% week over week",
      "created_at": days_ago(3, 6).to_rfc3339()
    }),
    finance_event(days_ago(2, 2)),
    json!({
      "source_system": "ops",
      "event_type": "Carrier Delay",
      "severity": "medium",
      "description": "Regional carrier reported 1-day pickup delays",
      "created_at": days_ago(1, 4).to_rfc3339()
    }),
    critical_event(days_ago(0, 2)),
  ]
}
