//! The taxonomy model — declarative field definitions.
//!
//! A taxonomy is a tree of [`TaxonomyNode`]s. Leaves are closed literal
//! sets, free text, or flags; interior nodes are named sections whose
//! children may be optional. The tree is pure data: the same structure
//! drives both validation ([`crate::validate`]) and the prompt-facing
//! format-instruction renderer below. No runtime reflection anywhere.

use std::fmt::Write as _;

// ─── Nodes ───────────────────────────────────────────────────────────────────

/// One admissible value of a [`TaxonomyNode::Choice`] node, with a
/// human-readable gloss of its intended meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceLiteral {
  pub value: String,
  pub gloss: String,
}

/// A named child of a [`TaxonomyNode::Section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
  pub name:        String,
  pub description: String,
  pub required:    bool,
  pub node:        TaxonomyNode,
}

impl Field {
  pub fn required(
    name: &str,
    description: &str,
    node: TaxonomyNode,
  ) -> Self {
    Self {
      name: name.to_owned(),
      description: description.to_owned(),
      required: true,
      node,
    }
  }

  pub fn optional(
    name: &str,
    description: &str,
    node: TaxonomyNode,
  ) -> Self {
    Self {
      name: name.to_owned(),
      description: description.to_owned(),
      required: false,
      node,
    }
  }
}

/// A field definition: what shape a value at this position must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyNode {
  /// A closed set of literal strings. The set is fixed at definition
  /// time and is never empty.
  Choice { literals: Vec<ChoiceLiteral> },
  /// A named set of child fields, each required or optional.
  Section { fields: Vec<Field> },
  /// Free-form string.
  Text,
  /// Boolean.
  Flag,
  /// A sequence of values all matching the inner node.
  Seq(Box<TaxonomyNode>),
}

impl TaxonomyNode {
  /// Build a choice node from `(value, gloss)` pairs.
  ///
  /// Panics if `literals` is empty — an empty closed set is a
  /// definition-time programming error, not a runtime condition.
  pub fn choice(literals: &[(&str, &str)]) -> Self {
    assert!(
      !literals.is_empty(),
      "a choice node requires at least one literal"
    );
    Self::Choice {
      literals: literals
        .iter()
        .map(|(value, gloss)| ChoiceLiteral {
          value: (*value).to_owned(),
          gloss: (*gloss).to_owned(),
        })
        .collect(),
    }
  }

  pub fn section(fields: Vec<Field>) -> Self { Self::Section { fields } }

  pub fn seq(inner: TaxonomyNode) -> Self { Self::Seq(Box::new(inner)) }

  /// The structural kind name used in mismatch violations.
  pub fn kind_name(&self) -> &'static str {
    match self {
      Self::Choice { .. } => "choice",
      Self::Section { .. } => "section",
      Self::Text => "text",
      Self::Flag => "flag",
      Self::Seq(_) => "seq",
    }
  }

  /// The allowed literal values, if this is a choice node.
  pub fn literal_values(&self) -> Option<Vec<&str>> {
    match self {
      Self::Choice { literals } => {
        Some(literals.iter().map(|l| l.value.as_str()).collect())
      }
      _ => None,
    }
  }
}

// ─── Format-instruction rendering ────────────────────────────────────────────

/// Render plain-text format instructions for `root`, suitable for
/// embedding in a generation prompt. One generic walker serves every
/// node kind; the catalog contributes only data.
pub fn render_format_instructions(root: &TaxonomyNode) -> String {
  let mut out = String::new();
  out.push_str(
    "Respond with a single JSON object. Fields marked optional may be \
     omitted; every other field is required. For fields with an \
     enumerated value set, reply with exactly one of the listed strings, \
     verbatim.\n",
  );
  render_node(&mut out, root, 0);
  out
}

fn render_node(out: &mut String, node: &TaxonomyNode, depth: usize) {
  let pad = "  ".repeat(depth);
  match node {
    TaxonomyNode::Choice { literals } => {
      let _ = writeln!(out, "{pad}one of:");
      for lit in literals {
        let _ = writeln!(out, "{pad}  * \"{}\": {}", lit.value, lit.gloss);
      }
    }
    TaxonomyNode::Section { fields } => {
      for field in fields {
        let req = if field.required { "required" } else { "optional" };
        let _ = writeln!(
          out,
          "{pad}- {} ({req}, {}): {}",
          field.name,
          field.node.kind_name(),
          field.description
        );
        match &field.node {
          TaxonomyNode::Text | TaxonomyNode::Flag => {}
          nested => render_node(out, nested, depth + 1),
        }
      }
    }
    TaxonomyNode::Seq(inner) => {
      let _ = writeln!(out, "{pad}a JSON array; each element is:");
      render_node(out, inner, depth + 1);
    }
    TaxonomyNode::Text => {
      let _ = writeln!(out, "{pad}a free-form string");
    }
    TaxonomyNode::Flag => {
      let _ = writeln!(out, "{pad}a boolean");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[should_panic(expected = "at least one literal")]
  fn empty_choice_set_panics() {
    let _ = TaxonomyNode::choice(&[]);
  }

  #[test]
  fn instructions_list_choice_literals() {
    let node = TaxonomyNode::section(vec![Field::required(
      "mood",
      "Overall mood of the scene.",
      TaxonomyNode::choice(&[
        ("Tense", "Conflict is near the surface."),
        ("Relaxed", "No pressure on anyone."),
      ]),
    )]);

    let text = render_format_instructions(&node);
    assert!(text.contains("- mood (required, choice)"));
    assert!(text.contains("\"Tense\""));
    assert!(text.contains("\"Relaxed\""));
  }

  #[test]
  fn instructions_mark_optional_fields() {
    let node = TaxonomyNode::section(vec![Field::optional(
      "notes",
      "Anything else worth recording.",
      TaxonomyNode::Text,
    )]);

    let text = render_format_instructions(&node);
    assert!(text.contains("- notes (optional, text)"));
  }
}
