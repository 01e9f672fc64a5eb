//! SQL schema for the Scenelens SQLite store.
//!
//! Executed on every open via [`crate::SceneStore::ensure_initialized`];
//! idempotent thanks to `CREATE TABLE IF NOT EXISTS`, so calling it on
//! every process start never touches existing rows. Future migrations
//! will be gated on `PRAGMA user_version`.

pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS scenes (
    scene_id   TEXT PRIMARY KEY,  -- non-empty, caller-supplied
    content    TEXT NOT NULL,     -- compact JSON document
    created_at TEXT NOT NULL,     -- ISO 8601 UTC; set once at first write
    updated_at TEXT NOT NULL      -- ISO 8601 UTC; refreshed on every write
);

CREATE INDEX IF NOT EXISTS scenes_updated_idx ON scenes(updated_at);

PRAGMA user_version = 1;
";
