//! Integration tests for `SceneStore` against an in-memory database.

use std::time::Duration;

use serde_json::{json, Value};

use crate::{Error, FilterParams, SceneStore};

async fn store() -> SceneStore {
  SceneStore::open_in_memory().await.expect("in-memory store")
}

/// Insert a row whose content column is not valid JSON, bypassing the
/// public API (which only accepts JSON values).
async fn insert_raw(store: &SceneStore, scene_id: &str, content: &str) {
  let scene_id = scene_id.to_owned();
  let content = content.to_owned();
  store
    .conn
    .call(move |conn| {
      conn.execute(
        "INSERT INTO scenes (scene_id, content, created_at, updated_at)
         VALUES (?1, ?2, '2026-01-01T00:00:00+00:00', '2026-01-01T00:00:00+00:00')",
        rusqlite::params![scene_id, content],
      )?;
      Ok(())
    })
    .await
    .expect("raw insert");
}

// ─── Upsert & get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_then_get_round_trips_content() {
  let s = store().await;
  let content = json!({ "judgment": "Adherence", "notes": ["a", "b"] });

  let doc = s.upsert(Some("s1"), &content).await.unwrap();
  assert_eq!(doc.scene_id, "s1");
  assert_eq!(doc.created_at, doc.updated_at);

  let fetched = s.get("s1").await.unwrap().expect("document exists");
  assert_eq!(fetched.content, content);
  assert_eq!(fetched.created_at, doc.created_at);
}

#[tokio::test]
async fn second_upsert_keeps_created_at_and_bumps_updated_at() {
  let s = store().await;

  let first = s.upsert(Some("s1"), &json!({ "v": 1 })).await.unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;
  let second = s.upsert(Some("s1"), &json!({ "v": 2 })).await.unwrap();

  assert_eq!(second.created_at, first.created_at);
  assert!(second.updated_at > first.updated_at);
  assert_eq!(second.content, json!({ "v": 2 }));

  // Still a single row.
  let rows = s
    .raw_select("SELECT COUNT(*) AS n FROM scenes")
    .await
    .unwrap();
  assert_eq!(rows[0]["n"], 1);
}

#[tokio::test]
async fn upsert_resolves_key_from_content() {
  let s = store().await;
  let content = json!({ "scene_id": "from-content", "x": true });

  let doc = s.upsert(None, &content).await.unwrap();
  assert_eq!(doc.scene_id, "from-content");
  assert!(s.get("from-content").await.unwrap().is_some());
}

#[tokio::test]
async fn explicit_key_wins_over_content_key() {
  let s = store().await;
  let content = json!({ "scene_id": "inner" });

  let doc = s.upsert(Some("outer"), &content).await.unwrap();
  assert_eq!(doc.scene_id, "outer");
  assert!(s.get("inner").await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_without_any_key_errors() {
  let s = store().await;
  let err = s.upsert(None, &json!({ "x": 1 })).await.unwrap_err();
  assert!(matches!(err, Error::InvalidKey));
}

#[tokio::test]
async fn upsert_with_empty_key_errors() {
  let s = store().await;
  let err = s.upsert(Some(""), &json!({ "x": 1 })).await.unwrap_err();
  assert!(matches!(err, Error::InvalidKey));

  let err = s
    .upsert(None, &json!({ "scene_id": "" }))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::InvalidKey));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn ensure_initialized_is_idempotent() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "v": 1 })).await.unwrap();

  s.ensure_initialized().await.unwrap();
  s.ensure_initialized().await.unwrap();

  let doc = s.get("s1").await.unwrap().expect("row survives re-init");
  assert_eq!(doc.content, json!({ "v": 1 }));
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lookup_returns_decoded_content() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "judgment": "Adherence" }))
    .await
    .unwrap();

  let content = s.lookup("s1").await.unwrap().expect("found");
  assert_eq!(content["judgment"], "Adherence");

  assert!(s.lookup("absent").await.unwrap().is_none());
}

// ─── Path filter ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn filter_equals_matches_one_document() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "judgment": "Adherence" }))
    .await
    .unwrap();
  s.upsert(Some("s2"), &json!({ "judgment": "Violation" }))
    .await
    .unwrap();

  let rows = s
    .filter(FilterParams::new("$.judgment").equals("Adherence"))
    .await
    .unwrap();

  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "s1");
  assert_eq!(rows[0]["content"]["judgment"], "Adherence");
}

#[tokio::test]
async fn filter_like_uses_wildcards() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "emotion": "Anger (Frustration, Rage, Irritation)" }))
    .await
    .unwrap();
  s.upsert(Some("s2"), &json!({ "emotion": "Joy (Happiness, Amusement, Relief)" }))
    .await
    .unwrap();

  let rows = s
    .filter(FilterParams::new("$.emotion").like("Anger%"))
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "s1");

  // Single-character wildcard.
  let rows = s
    .filter(FilterParams::new("$.emotion").like("Jo_ (Happiness%"))
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "s2");
}

#[tokio::test]
async fn filter_orders_by_scene_id_and_limits() {
  let s = store().await;
  for id in ["s3", "s1", "s2"] {
    s.upsert(Some(id), &json!({ "kind": "x" })).await.unwrap();
  }

  let rows = s
    .filter(FilterParams::new("$.kind").equals("x").limit(2))
    .await
    .unwrap();

  let ids: Vec<&Value> = rows.iter().map(|r| &r["scene_id"]).collect();
  assert_eq!(ids, [&json!("s1"), &json!("s2")]);
}

#[tokio::test]
async fn filter_on_nested_path() {
  let s = store().await;
  s.upsert(
    Some("s1"),
    &json!({
      "comprehension_layer": {
        "emotional_state": { "felt_emotion": "Neutral (Baseline, Calm)" }
      }
    }),
  )
  .await
  .unwrap();

  let rows = s
    .filter(
      FilterParams::new("$.comprehension_layer.emotional_state.felt_emotion")
        .equals("Neutral (Baseline, Calm)"),
    )
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn filter_without_probe_is_rejected_before_scanning() {
  let s = store().await;
  let err = s.filter(FilterParams::new("$.x")).await.unwrap_err();
  assert!(matches!(err, Error::QueryUsage(_)));
}

#[tokio::test]
async fn filter_with_both_probes_is_rejected() {
  let s = store().await;
  let err = s
    .filter(FilterParams::new("$.x").equals("a").like("b%"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::QueryUsage(_)));
}

#[tokio::test]
async fn filter_skips_undecodable_rows() {
  let s = store().await;
  s.upsert(Some("good"), &json!({ "kind": "x" })).await.unwrap();
  insert_raw(&s, "bad", "{not json").await;

  let rows = s
    .filter(FilterParams::new("$.kind").equals("x"))
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "good");
}

// ─── Raw queries ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn raw_select_executes_and_decodes_content() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "judgment": "Adherence" }))
    .await
    .unwrap();

  let rows = s
    .raw_select("SELECT scene_id, content FROM scenes LIMIT 1")
    .await
    .unwrap();

  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "s1");
  assert_eq!(rows[0]["content"]["judgment"], "Adherence");
}

#[tokio::test]
async fn raw_with_query_is_allowed() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "v": 1 })).await.unwrap();

  let rows = s
    .raw_select("WITH ids AS (SELECT scene_id FROM scenes) SELECT * FROM ids")
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn raw_mutating_queries_are_rejected_before_execution() {
  let s = store().await;
  s.upsert(Some("s1"), &json!({ "v": 1 })).await.unwrap();

  for sql in [
    "DROP TABLE scenes",
    "DELETE FROM scenes",
    "  delete FROM scenes",
    "UPDATE scenes SET content = '{}'",
    "INSERT INTO scenes VALUES ('x', '{}', '', '')",
    "",
  ] {
    let err = s.raw_select(sql).await.unwrap_err();
    assert!(matches!(err, Error::QueryUsage(_)), "{sql:?} should be rejected");
  }

  // Nothing was executed: the row is untouched.
  assert!(s.get("s1").await.unwrap().is_some());
}

#[tokio::test]
async fn raw_select_emits_raw_text_for_undecodable_content() {
  let s = store().await;
  insert_raw(&s, "bad", "{not json").await;

  let rows = s
    .raw_select("SELECT scene_id, content FROM scenes")
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["content"], "{not json");
}

// ─── End to end with the catalog ─────────────────────────────────────────────

#[tokio::test]
async fn validated_emotional_state_round_trips_through_the_store() {
  use scenelens_core::{catalog, validate::validate};

  let input = json!({
    "felt_emotion": "Fear (Anxiety, Terror, Apprehension)",
    "arousal_level": "High (Intense, Overwhelming, Visceral)",
    "valence": "Negative (Unpleasant)",
    "displayed_emotion": "Joy (Happiness, Amusement, Relief)",
    "display_rule": "Masked (Replacing true emotion with a fake one - e.g., Smiling while angry)",
    "trigger_event": "The interviewer frowned at the resume.",
  });
  let record = validate(&input, &catalog::emotional_state()).unwrap();

  let s = store().await;
  s.upsert(Some("scene-7"), &record.to_value()).await.unwrap();

  let stored = s.lookup("scene-7").await.unwrap().expect("stored");
  assert_eq!(stored, record.to_value());

  let rows = s
    .filter(
      FilterParams::new("$.display_rule").like("Masked%"),
    )
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["scene_id"], "scene-7");
}
