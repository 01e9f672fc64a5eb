//! Encoding and decoding helpers between Rust types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings. Document content is compact JSON
//! text; decode then re-encode of an unchanged document is value-equal
//! (byte equality is not promised and not needed).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{Error, Result};

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Content ─────────────────────────────────────────────────────────────────

pub fn encode_content(content: &Value) -> Result<String> {
  Ok(serde_json::to_string(content)?)
}

/// Decode a stored content column, falling back to the raw text when the
/// row does not hold valid JSON. Used on scan paths where one bad row
/// must not abort the batch.
pub fn decode_content_lossy(text: &str) -> Value {
  match serde_json::from_str(text) {
    Ok(value) => value,
    Err(e) => {
      tracing::warn!(error = %e, "stored content is not valid JSON; emitting raw text");
      Value::String(text.to_owned())
    }
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `scenes` row.
pub struct RawScene {
  pub scene_id:   String,
  pub content:    String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawScene {
  pub fn into_document(self) -> Result<crate::SceneDocument> {
    Ok(crate::SceneDocument {
      scene_id:   self.scene_id,
      content:    serde_json::from_str(&self.content)?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
