//! Structured error types for the binary rim. The aggregation core itself
//! never fails — malformed input degrades to defaults instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("flag: {0}")]
  Flag(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn flag(msg: impl Into<String>) -> Self {
    Self::Flag(msg.into())
  }
}
