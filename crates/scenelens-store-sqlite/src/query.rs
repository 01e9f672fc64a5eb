//! Read-only query modes over the scene store: key lookup, json-path
//! filter, and an allow-listed raw SELECT.
//!
//! All three modes emit rows as JSON objects with the stored content
//! structurally decoded where possible; a row whose content fails to
//! decode surfaces its raw text instead of aborting the batch.

use rusqlite::types::ValueRef;
use serde_json::{json, Map, Value};

use crate::{encode::decode_content_lossy, Error, Result, SceneStore};

pub const DEFAULT_FILTER_LIMIT: usize = 25;

// ─── Filter parameters ───────────────────────────────────────────────────────

/// Parameters for [`SceneStore::filter`]. Exactly one of `equals` and
/// `like` must be set.
#[derive(Debug, Clone)]
pub struct FilterParams {
  /// SQLite JSON path into the content tree, e.g.
  /// `$.comprehension_layer.emotional_state.felt_emotion`.
  pub path:   String,
  /// Equality probe for the extracted value.
  pub equals: Option<String>,
  /// LIKE pattern for the extracted value (`%` multi-character, `_`
  /// single-character wildcard).
  pub like:   Option<String>,
  pub limit:  usize,
}

impl FilterParams {
  pub fn new(path: &str) -> Self {
    Self {
      path:   path.to_owned(),
      equals: None,
      like:   None,
      limit:  DEFAULT_FILTER_LIMIT,
    }
  }

  pub fn equals(mut self, value: &str) -> Self {
    self.equals = Some(value.to_owned());
    self
  }

  pub fn like(mut self, pattern: &str) -> Self {
    self.like = Some(pattern.to_owned());
    self
  }

  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = limit;
    self
  }
}

// ─── Query modes ─────────────────────────────────────────────────────────────

impl SceneStore {
  /// Mode A: return the single matching document's content, or `None`.
  pub async fn lookup(&self, scene_id: &str) -> Result<Option<Value>> {
    Ok(self.get(scene_id).await?.map(|doc| doc.content))
  }

  /// Mode B: scan documents, extract the value at `params.path` from
  /// each, and keep documents whose value equals the probe or matches
  /// the pattern. Ordered by scene id ascending, truncated to
  /// `params.limit`.
  ///
  /// Rejected with [`Error::QueryUsage`] before any scan unless exactly
  /// one of `equals`/`like` is set.
  pub async fn filter(&self, params: FilterParams) -> Result<Vec<Value>> {
    let (operator, probe) = match (params.equals, params.like) {
      (Some(value), None) => ("=", value),
      (None, Some(pattern)) => ("LIKE", pattern),
      (None, None) => {
        return Err(Error::QueryUsage(
          "a path filter requires either an equality value or a LIKE pattern"
            .into(),
        ));
      }
      (Some(_), Some(_)) => {
        return Err(Error::QueryUsage(
          "equality value and LIKE pattern are mutually exclusive".into(),
        ));
      }
    };

    let path = params.path;
    let limit = params.limit as i64;
    // json_valid guard: rows with undecodable content are skipped here,
    // not errors (json_extract would abort the whole scan on them).
    let sql = format!(
      "SELECT scene_id, content
       FROM scenes
       WHERE json_valid(content)
         AND json_extract(content, ?1) {operator} ?2
       ORDER BY scene_id
       LIMIT ?3"
    );

    let rows: Vec<(String, String)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![path, probe, limit], |row| {
            Ok((row.get(0)?, row.get(1)?))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(
      rows
        .into_iter()
        .map(|(scene_id, content)| {
          json!({
            "scene_id": scene_id,
            "content": decode_content_lossy(&content),
          })
        })
        .collect(),
    )
  }

  /// Mode C: execute a caller-supplied read-only query verbatim.
  ///
  /// The trimmed, case-folded leading token must be `SELECT` or `WITH`;
  /// anything else — including mutating or deleting statements — is
  /// rejected with [`Error::QueryUsage`] and never reaches SQLite.
  pub async fn raw_select(&self, sql: &str) -> Result<Vec<Value>> {
    let leading = sql
      .trim()
      .split_whitespace()
      .next()
      .unwrap_or("")
      .to_ascii_lowercase();
    if leading != "select" && leading != "with" {
      return Err(Error::QueryUsage(
        "only SELECT/WITH queries are allowed".into(),
      ));
    }

    let sql = sql.to_owned();
    let rows: Vec<Value> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let columns: Vec<String> =
          stmt.column_names().iter().map(|c| (*c).to_owned()).collect();

        let rows = stmt
          .query_map([], |row| {
            let mut object = Map::with_capacity(columns.len());
            for (i, name) in columns.iter().enumerate() {
              object.insert(name.clone(), column_to_json(name, row.get_ref(i)?));
            }
            Ok(Value::Object(object))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }
}

/// Map one SQLite column value to JSON. Text in a `content` column is
/// decoded back into a tree when possible.
fn column_to_json(name: &str, value: ValueRef<'_>) -> Value {
  match value {
    ValueRef::Null => Value::Null,
    ValueRef::Integer(i) => Value::from(i),
    ValueRef::Real(f) => {
      serde_json::Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
    ValueRef::Text(bytes) => {
      let text = String::from_utf8_lossy(bytes);
      if name == "content" {
        decode_content_lossy(&text)
      } else {
        Value::String(text.into_owned())
      }
    }
    // Blobs never appear in our schema; emitted lossily for ad-hoc SQL.
    ValueRef::Blob(bytes) => {
      Value::String(String::from_utf8_lossy(bytes).into_owned())
    }
  }
}
