//! `scenelens` — extract, store, and query structured scene analyses.
//!
//! # Usage
//!
//! ```text
//! scenelens extract "Two coworkers argue over a missed deadline." --scene-id s1
//! scenelens store --scene-id s1 --file analysis.json --validate
//! scenelens query --scene-id s1
//! scenelens query --json-path '$.comprehension_layer.emotional_state.felt_emotion' \
//!     --like 'Anger%'
//! scenelens query --sql 'SELECT scene_id FROM scenes LIMIT 5'
//! ```

mod client;
mod prompt;

use std::{io::Read as _, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use scenelens_core::{
  catalog,
  validate::{self, Violation},
};
use scenelens_store_sqlite::{FilterParams, SceneStore};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::client::{ChatClient, ChatConfig};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "scenelens", about = "Scene-analysis extraction and query tool")]
struct Cli {
  /// Path to the SQLite scene database.
  #[arg(long, env = "SCENELENS_DB", default_value = "scenes.db")]
  db: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run one extraction round trip and store the validated record.
  Extract {
    /// Narrative scene text to analyse.
    input: String,

    /// Storage key; falls back to a scene_id field in the model output.
    #[arg(long)]
    scene_id: Option<String>,

    /// Model name passed to the generation service.
    #[arg(long, default_value = "gpt-4o")]
    model: String,

    /// Print the validated record without persisting it.
    #[arg(long)]
    no_store: bool,

    /// Base URL of the OpenAI-compatible endpoint.
    #[arg(long, env = "SCENELENS_BASE_URL", default_value = "https://api.openai.com")]
    base_url: String,

    /// API key for the generation service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,
  },

  /// Store a JSON document read from a file or stdin.
  Store {
    /// Storage key; falls back to a scene_id field in the document.
    #[arg(long)]
    scene_id: Option<String>,

    /// Read the document from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Validate against the social-event taxonomy before storing.
    #[arg(long)]
    validate: bool,
  },

  /// Query stored analyses. Exactly one mode must be selected.
  #[command(group(
    ArgGroup::new("mode").required(true).args(["scene_id", "json_path", "sql"])
  ))]
  Query {
    /// Look up a single scene id.
    #[arg(long)]
    scene_id: Option<String>,

    /// SQLite JSON path for filtering, e.g.
    /// $.comprehension_layer.emotional_state.felt_emotion
    #[arg(long)]
    json_path: Option<String>,

    /// Run a custom SELECT/WITH query.
    #[arg(long)]
    sql: Option<String>,

    /// Match value for --json-path.
    #[arg(long)]
    equals: Option<String>,

    /// LIKE pattern for --json-path.
    #[arg(long)]
    like: Option<String>,

    /// Row limit for --json-path queries.
    #[arg(long, default_value_t = 25)]
    limit: usize,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  match cli.command {
    Command::Extract {
      input,
      scene_id,
      model,
      no_store,
      base_url,
      api_key,
    } => {
      let rendered = prompt::render(&input);
      let chat = ChatClient::new(ChatConfig { base_url, api_key })?;

      tracing::info!(%model, "requesting extraction");
      let reply = chat.complete(&model, &rendered).await?;

      let candidate = strip_code_fences(&reply);
      let record = match validate::parse_and_validate(
        candidate,
        &catalog::social_event_analysis(),
      ) {
        Ok(record) => record,
        Err(scenelens_core::Error::Validation(violations)) => {
          return Err(violation_report(&violations));
        }
        Err(other) => {
          return Err(other).context("model reply was not parseable JSON");
        }
      };

      let value = record.to_value();
      if !no_store {
        let store = SceneStore::open(&cli.db).await?;
        let doc = store.upsert(scene_id.as_deref(), &value).await?;
        tracing::info!(scene_id = %doc.scene_id, "stored scene analysis");
      }
      println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Command::Store { scene_id, file, validate: check } => {
      let raw = match &file {
        Some(path) => std::fs::read_to_string(path)
          .with_context(|| format!("reading {}", path.display()))?,
        None => {
          let mut buf = String::new();
          std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
          buf
        }
      };

      let value = validate::parse_text(&raw)?;
      if check {
        if let Err(scenelens_core::Error::Validation(violations)) =
          validate::validate(&value, &catalog::social_event_analysis())
        {
          return Err(violation_report(&violations));
        }
      }

      let store = SceneStore::open(&cli.db).await?;
      let doc = store.upsert(scene_id.as_deref(), &value).await?;
      println!("stored {}", doc.scene_id);
    }

    Command::Query { scene_id, json_path, sql, equals, like, limit } => {
      let store = SceneStore::open(&cli.db).await?;

      if let Some(id) = scene_id {
        match store.lookup(&id).await? {
          Some(content) => {
            println!("{}", serde_json::to_string_pretty(&content)?);
          }
          None => println!("No results."),
        }
        return Ok(());
      }

      let rows = if let Some(path) = json_path {
        let mut params = FilterParams::new(&path).limit(limit);
        params.equals = equals;
        params.like = like;
        store.filter(params).await?
      } else if let Some(sql) = sql {
        store.raw_select(&sql).await?
      } else {
        unreachable!("clap enforces exactly one query mode");
      };

      println!("{}", serde_json::to_string_pretty(&rows)?);
    }
  }

  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Generation services often wrap JSON replies in markdown code fences;
/// strip one fence pair if present.
fn strip_code_fences(text: &str) -> &str {
  let trimmed = text.trim();
  let Some(rest) = trimmed.strip_prefix("```") else {
    return trimmed;
  };
  let rest = rest.strip_prefix("json").unwrap_or(rest);
  rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn violation_report(violations: &[Violation]) -> anyhow::Error {
  eprintln!("the record does not conform to the taxonomy:");
  for violation in violations {
    eprintln!("  {violation}");
  }
  anyhow::anyhow!("{} validation violations", violations.len())
}

#[cfg(test)]
mod tests {
  use super::strip_code_fences;

  #[test]
  fn strips_fenced_json() {
    assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
  }

  #[test]
  fn leaves_plain_text_alone() {
    assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
  }
}
