//! Error types for `scenelens-core`.

use thiserror::Error;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum Error {
  /// The input text was not well-formed JSON. The original text is kept
  /// so callers can log or re-prompt with it.
  #[error("input is not well-formed JSON: {reason}")]
  Parse { reason: String, text: String },

  /// The input parsed but does not conform to the taxonomy. Carries
  /// every violation found in the tree, not just the first.
  #[error("record does not conform to the taxonomy ({count} violations)", count = .0.len())]
  Validation(Vec<Violation>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
