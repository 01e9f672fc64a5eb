//! The validation engine — raw text in, [`AnalysisRecord`] or an
//! exhaustive violation list out.
//!
//! Validation never short-circuits: the whole tree is walked and every
//! violation collected before the result is decided, so a caller can
//! correct or re-prompt in a single pass. No automatic repair is ever
//! attempted.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{
  record::{AnalysisRecord, RecordNode},
  schema::TaxonomyNode,
  Error, Result,
};

// ─── Violations ──────────────────────────────────────────────────────────────

/// A single point of non-conformance, located by a `$.a.b[2].c` path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
  /// A required field is absent (or null).
  Missing { path: String },
  /// The wrong structural kind appeared, e.g. a scalar where a section
  /// was expected.
  TypeMismatch {
    path:     String,
    expected: &'static str,
    actual:   &'static str,
  },
  /// A choice leaf holds a string outside its node's literal set.
  InvalidChoice {
    path:    String,
    value:   String,
    allowed: Vec<String>,
  },
}

impl Violation {
  pub fn path(&self) -> &str {
    match self {
      Self::Missing { path }
      | Self::TypeMismatch { path, .. }
      | Self::InvalidChoice { path, .. } => path,
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Missing { path } => write!(f, "{path}: required field is missing"),
      Self::TypeMismatch { path, expected, actual } => {
        write!(f, "{path}: expected {expected}, found {actual}")
      }
      Self::InvalidChoice { path, value, allowed } => {
        write!(
          f,
          "{path}: {value:?} is not an allowed value (allowed: {})",
          allowed
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(", ")
        )
      }
    }
  }
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Structural parse of raw text into a generic JSON tree.
///
/// A failure here is a [`Error::Parse`], not a validation failure; the
/// original text travels with the error for debugging.
pub fn parse_text(text: &str) -> Result<Value> {
  serde_json::from_str(text).map_err(|e| Error::Parse {
    reason: e.to_string(),
    text:   text.to_owned(),
  })
}

/// Walk `value` against the taxonomy rooted at `root`, collecting every
/// violation. Returns the typed record only when the violation list is
/// empty.
pub fn validate(value: &Value, root: &TaxonomyNode) -> Result<AnalysisRecord> {
  let mut violations = Vec::new();
  let node = walk(value, root, "$", &mut violations);

  // A violation-free walk always yields a node; the walker returns None
  // only after recording a violation.
  match node {
    Some(node) if violations.is_empty() => Ok(AnalysisRecord::new(node)),
    _ => Err(Error::Validation(violations)),
  }
}

/// Convenience: [`parse_text`] then [`validate`].
pub fn parse_and_validate(
  text: &str,
  root: &TaxonomyNode,
) -> Result<AnalysisRecord> {
  let value = parse_text(text)?;
  validate(&value, root)
}

// ─── Walker ──────────────────────────────────────────────────────────────────

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn walk(
  value: &Value,
  node: &TaxonomyNode,
  path: &str,
  violations: &mut Vec<Violation>,
) -> Option<RecordNode> {
  match node {
    TaxonomyNode::Text => match value {
      Value::String(s) => Some(RecordNode::Text(s.clone())),
      other => {
        violations.push(Violation::TypeMismatch {
          path:     path.to_owned(),
          expected: "text",
          actual:   json_kind(other),
        });
        None
      }
    },

    TaxonomyNode::Flag => match value {
      Value::Bool(b) => Some(RecordNode::Flag(*b)),
      other => {
        violations.push(Violation::TypeMismatch {
          path:     path.to_owned(),
          expected: "flag",
          actual:   json_kind(other),
        });
        None
      }
    },

    TaxonomyNode::Choice { literals } => match value {
      Value::String(s) => {
        if literals.iter().any(|lit| lit.value == *s) {
          Some(RecordNode::Choice(s.clone()))
        } else {
          violations.push(Violation::InvalidChoice {
            path:    path.to_owned(),
            value:   s.clone(),
            allowed: literals.iter().map(|l| l.value.clone()).collect(),
          });
          None
        }
      }
      other => {
        violations.push(Violation::TypeMismatch {
          path:     path.to_owned(),
          expected: "choice",
          actual:   json_kind(other),
        });
        None
      }
    },

    TaxonomyNode::Seq(inner) => match value {
      Value::Array(items) => {
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
          let child_path = format!("{path}[{i}]");
          if let Some(child) = walk(item, inner, &child_path, violations) {
            out.push(child);
          }
        }
        Some(RecordNode::Seq(out))
      }
      other => {
        violations.push(Violation::TypeMismatch {
          path:     path.to_owned(),
          expected: "seq",
          actual:   json_kind(other),
        });
        None
      }
    },

    TaxonomyNode::Section { fields } => match value {
      Value::Object(map) => {
        let mut out = BTreeMap::new();
        for field in fields {
          let child_path = format!("{path}.{}", field.name);
          match map.get(&field.name) {
            // Null is treated as absence throughout.
            None | Some(Value::Null) => {
              if field.required {
                violations.push(Violation::Missing { path: child_path });
              } else if let TaxonomyNode::Seq(_) = field.node {
                // Absent sequences default to empty, not missing.
                out.insert(field.name.clone(), RecordNode::Seq(Vec::new()));
              }
            }
            Some(present) => {
              if let Some(child) =
                walk(present, &field.node, &child_path, violations)
              {
                out.insert(field.name.clone(), child);
              }
            }
          }
        }
        // Keys outside the taxonomy are ignored, not violations.
        Some(RecordNode::Section(out))
      }
      other => {
        violations.push(Violation::TypeMismatch {
          path:     path.to_owned(),
          expected: "section",
          actual:   json_kind(other),
        });
        None
      }
    },
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
