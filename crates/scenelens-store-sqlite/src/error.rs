//! Error type for `scenelens-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No usable write key: none passed explicitly and none found in the
  /// content.
  #[error(
    "scene_id is required (pass one explicitly or include a 'scene_id' \
     field in the content)"
  )]
  InvalidKey,

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Malformed or disallowed query request, rejected before any data
  /// access.
  #[error("query usage error: {0}")]
  QueryUsage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
