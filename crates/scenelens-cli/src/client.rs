//! Minimal client for an OpenAI-compatible chat-completions endpoint.
//!
//! One blocking round trip per extraction; no retry, no backoff. Any
//! timeout policy lives here, not in the store or query engine.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::json;

/// Connection settings for the generation service.
#[derive(Debug, Clone)]
pub struct ChatConfig {
  pub base_url: String,
  pub api_key:  String,
}

/// Async HTTP client for the chat-completions API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ChatClient {
  client: reqwest::Client,
  config: ChatConfig,
}

#[derive(Deserialize)]
struct ChatResponse {
  choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
  message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
  content: String,
}

impl ChatClient {
  pub fn new(config: ChatConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(120))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  /// `POST /v1/chat/completions` with a single user message; returns the
  /// first choice's text.
  pub async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
    let url = format!(
      "{}/v1/chat/completions",
      self.config.base_url.trim_end_matches('/')
    );

    let body = json!({
      "model": model,
      "messages": [{ "role": "user", "content": prompt }],
    });

    let resp = self
      .client
      .post(&url)
      .bearer_auth(&self.config.api_key)
      .json(&body)
      .send()
      .await
      .context("chat completion request failed")?;

    let status = resp.status();
    if !status.is_success() {
      let detail = resp.text().await.unwrap_or_default();
      return Err(anyhow!("generation service returned {status}: {detail}"));
    }

    let parsed: ChatResponse = resp
      .json()
      .await
      .context("failed to decode chat completion response")?;

    parsed
      .choices
      .into_iter()
      .next()
      .map(|choice| choice.message.content)
      .ok_or_else(|| anyhow!("generation service returned no choices"))
  }
}
