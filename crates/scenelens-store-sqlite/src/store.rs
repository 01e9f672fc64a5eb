//! [`SceneStore`] — keyed persistence of scene-analysis documents.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use serde::Serialize;
use serde_json::Value;

use crate::{
  encode::{encode_content, encode_dt, RawScene},
  schema::SCHEMA,
  Error, Result,
};

// ─── Document ────────────────────────────────────────────────────────────────

/// The persisted unit: one scene's analysis content plus timestamps.
///
/// `created_at` is set on the first write for a scene id and never
/// changes; `updated_at` is refreshed by every write.
#[derive(Debug, Clone, Serialize)]
pub struct SceneDocument {
  pub scene_id:   String,
  pub content:    Value,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A scene store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SceneStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SceneStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.ensure_initialized().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.ensure_initialized().await?;
    Ok(store)
  }

  /// Create the underlying table if absent. Idempotent: safe on every
  /// process start and before every write, never wipes existing rows.
  pub async fn ensure_initialized(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("scene schema initialised");
    Ok(())
  }

  /// Insert or overwrite the document for a scene.
  ///
  /// The key is `scene_id` if given, otherwise the `scene_id` string
  /// field inside `content`; neither present (or empty) is
  /// [`Error::InvalidKey`]. The write runs in one transaction so a
  /// concurrent reader sees either the old row or the new row, never a
  /// torn content/timestamp pair.
  pub async fn upsert(
    &self,
    scene_id: Option<&str>,
    content: &Value,
  ) -> Result<SceneDocument> {
    let key = scene_id
      .or_else(|| content.get("scene_id").and_then(Value::as_str))
      .unwrap_or("");
    if key.is_empty() {
      return Err(Error::InvalidKey);
    }

    let key = key.to_owned();
    let content_str = encode_content(content)?;
    let now_str = encode_dt(Utc::now());

    let raw: RawScene = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO scenes (scene_id, content, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?3)
           ON CONFLICT(scene_id) DO UPDATE SET
               content    = excluded.content,
               updated_at = excluded.updated_at",
          rusqlite::params![key, content_str, now_str],
        )?;
        let raw = tx.query_row(
          "SELECT scene_id, content, created_at, updated_at
           FROM scenes WHERE scene_id = ?1",
          rusqlite::params![key],
          |row| {
            Ok(RawScene {
              scene_id:   row.get(0)?,
              content:    row.get(1)?,
              created_at: row.get(2)?,
              updated_at: row.get(3)?,
            })
          },
        )?;
        tx.commit()?;
        Ok(raw)
      })
      .await?;

    raw.into_document()
  }

  /// Retrieve the document for a scene. Absence is `None`, not an
  /// error.
  pub async fn get(&self, scene_id: &str) -> Result<Option<SceneDocument>> {
    let key = scene_id.to_owned();

    let raw: Option<RawScene> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT scene_id, content, created_at, updated_at
               FROM scenes WHERE scene_id = ?1",
              rusqlite::params![key],
              |row| {
                Ok(RawScene {
                  scene_id:   row.get(0)?,
                  content:    row.get(1)?,
                  created_at: row.get(2)?,
                  updated_at: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawScene::into_document).transpose()
  }
}
