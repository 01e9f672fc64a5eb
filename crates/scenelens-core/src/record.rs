//! The analysis record — a validated instance of a taxonomy.
//!
//! Produced only by [`crate::validate::validate`]; by construction every
//! choice value in the tree is a member of its node's literal set and
//! every required section child is present.

use std::collections::BTreeMap;

use serde_json::Value;

/// One validated value in the record tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordNode {
  Text(String),
  Flag(bool),
  /// A literal from the corresponding choice node's set.
  Choice(String),
  Seq(Vec<RecordNode>),
  Section(BTreeMap<String, RecordNode>),
}

impl RecordNode {
  /// Lossless conversion back to a generic JSON tree.
  pub fn to_value(&self) -> Value {
    match self {
      Self::Text(s) | Self::Choice(s) => Value::String(s.clone()),
      Self::Flag(b) => Value::Bool(*b),
      Self::Seq(items) => {
        Value::Array(items.iter().map(RecordNode::to_value).collect())
      }
      Self::Section(fields) => Value::Object(
        fields
          .iter()
          .map(|(name, node)| (name.clone(), node.to_value()))
          .collect(),
      ),
    }
  }
}

/// The root of a validated record tree. Always a section.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
  root: RecordNode,
}

impl AnalysisRecord {
  /// Internal constructor; only the validator should build records.
  pub(crate) fn new(root: RecordNode) -> Self { Self { root } }

  pub fn root(&self) -> &RecordNode { &self.root }

  /// Serialise to the generic JSON tree stored in the document store.
  /// Round-tripping through [`crate::validate::validate`] yields an
  /// equal record.
  pub fn to_value(&self) -> Value { self.root.to_value() }

  /// The `scene_id` field of the root section, if the record carries
  /// one. Used by the store to resolve a write key when the caller does
  /// not supply one explicitly.
  pub fn scene_id(&self) -> Option<&str> {
    match &self.root {
      RecordNode::Section(fields) => match fields.get("scene_id") {
        Some(RecordNode::Text(id)) => Some(id.as_str()),
        _ => None,
      },
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_value_preserves_structure() {
    let mut fields = BTreeMap::new();
    fields.insert("judgment".to_owned(), RecordNode::Choice("Adherence".into()));
    fields.insert("is_excusable".to_owned(), RecordNode::Flag(true));
    fields.insert(
      "cues".to_owned(),
      RecordNode::Seq(vec![RecordNode::Text("raised voice".into())]),
    );

    let record = AnalysisRecord::new(RecordNode::Section(fields));
    let value = record.to_value();

    assert_eq!(value["judgment"], "Adherence");
    assert_eq!(value["is_excusable"], true);
    assert_eq!(value["cues"][0], "raised voice");
  }

  #[test]
  fn scene_id_read_from_root() {
    let mut fields = BTreeMap::new();
    fields.insert("scene_id".to_owned(), RecordNode::Text("s1".into()));
    let record = AnalysisRecord::new(RecordNode::Section(fields));
    assert_eq!(record.scene_id(), Some("s1"));
  }

  #[test]
  fn scene_id_absent_is_none() {
    let record = AnalysisRecord::new(RecordNode::Section(BTreeMap::new()));
    assert_eq!(record.scene_id(), None);
  }
}
