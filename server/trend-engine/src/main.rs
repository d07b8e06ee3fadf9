//! Binary entrypoint: read one JSON event array from stdin, write one
//! Snapshot JSON object to stdout. Logs go to stderr so stdout stays clean.
//!
//! Usage:
//!   trend-engine [--tab all|critical|hr|finance] [--window-days N]
//!                [--on-empty empty|synthetic] [--now RFC3339]
//!                [--utc-offset-minutes N] [--pretty]
//!
//! Unparseable stdin degrades to an empty event list; only I/O and flag
//! errors exit non-zero.

use chrono::{DateTime, FixedOffset, Utc};
use std::io::{self, Read, Write};

use trend_engine::{Config, EmptyPolicy, Engine, EngineError, Tab};

struct Flags {
  tab: Tab,
  now: Option<DateTime<FixedOffset>>,
  utc_offset_minutes: i32,
  pretty: bool,
  config: Config,
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp_millis()
    .init();

  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "trend-engine error: {}", e);
    if matches!(e, EngineError::Flag(_)) {
      print_usage();
    }
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let flags = parse_flags(std::env::args().skip(1))?;

  let offset = FixedOffset::east_opt(flags.utc_offset_minutes * 60)
    .ok_or_else(|| EngineError::flag("--utc-offset-minutes out of range"))?;
  let now = flags
    .now
    .map(|n| n.with_timezone(&offset))
    .unwrap_or_else(|| Utc::now().with_timezone(&offset));

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let payload: serde_json::Value = serde_json::from_str(&raw).unwrap_or_else(|e| {
    log::warn!("stdin is not valid JSON ({}); treating as empty event list", e);
    serde_json::Value::Null
  });

  let engine = Engine::new(flags.config);
  let snapshot = engine.snapshot_from_value(&payload, flags.tab, now);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if flags.pretty {
    serde_json::to_writer_pretty(&mut out, &snapshot)?;
  } else {
    serde_json::to_writer(&mut out, &snapshot)?;
  }
  writeln!(out)?;
  Ok(())
}

fn parse_flags(args: impl Iterator<Item = String>) -> Result<Flags, EngineError> {
  let mut flags = Flags {
    tab: Tab::All,
    now: None,
    utc_offset_minutes: 0,
    pretty: false,
    config: Config::default(),
  };

  let args: Vec<String> = args.collect();
  let mut i = 0;
  while i < args.len() {
    match args[i].as_str() {
      "--tab" => {
        let v = flag_value(&args, &mut i, "--tab")?;
        flags.tab = Tab::from_str_loose(&v)
          .ok_or_else(|| EngineError::flag(format!("--tab: unknown tab {:?}", v)))?;
      }
      "--window-days" => {
        let v = flag_value(&args, &mut i, "--window-days")?;
        flags.config.window_days = v
          .parse::<u32>()
          .ok()
          .filter(|&n| n >= 1)
          .ok_or_else(|| EngineError::flag("--window-days: expected a positive integer"))?;
      }
      "--on-empty" => {
        let v = flag_value(&args, &mut i, "--on-empty")?;
        flags.config.on_empty = match v.as_str() {
          "empty" => EmptyPolicy::Empty,
          "synthetic" => EmptyPolicy::SyntheticFallback,
          other => {
            return Err(EngineError::flag(format!(
              "--on-empty: expected empty|synthetic, got {:?}",
              other
            )))
          }
        };
      }
      "--now" => {
        let v = flag_value(&args, &mut i, "--now")?;
        flags.now = Some(
          DateTime::parse_from_rfc3339(&v)
            .map_err(|e| EngineError::flag(format!("--now: invalid RFC3339: {}", e)))?,
        );
      }
      "--utc-offset-minutes" => {
        let v = flag_value(&args, &mut i, "--utc-offset-minutes")?;
        flags.utc_offset_minutes = v
          .parse()
          .map_err(|_| EngineError::flag("--utc-offset-minutes: expected an integer"))?;
      }
      "--pretty" => flags.pretty = true,
      other => return Err(EngineError::flag(format!("unknown flag {:?}", other))),
    }
    i += 1;
  }
  Ok(flags)
}

fn flag_value(args: &[String], i: &mut usize, name: &str) -> Result<String, EngineError> {
  *i += 1;
  args
    .get(*i)
    .cloned()
    .ok_or_else(|| EngineError::flag(format!("{} requires a value", name)))
}

fn print_usage() {
  eprintln!("Usage: trend-engine [--tab all|critical|hr|finance] [--window-days N]");
  eprintln!("                    [--on-empty empty|synthetic] [--now RFC3339]");
  eprintln!("                    [--utc-offset-minutes N] [--pretty]");
  eprintln!("Reads a JSON event array from stdin; writes a Snapshot object to stdout.");
}
