/*! Source location types. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An exact position in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SourceAnchor {
  pub file_path: String,
  /// 1-based line number. Never zero.
  pub line_number: u32,
}

impl SourceAnchor {
  pub fn new(file_path: impl Into<String>, line_number: u32) -> Self {
    Self {
      file_path: file_path.into(),
      line_number,
    }
  }
}

impl std::fmt::Display for SourceAnchor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.file_path, self.line_number)
  }
}

/// Where in the source an element originated.
///
/// Absence (no annotation anywhere up the ancestor chain) is `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum Location {
  /// The element carries its own source annotation.
  #[serde(rename = "self")]
  Exact(SourceAnchor),
  /// Resolved from the nearest annotated ancestor.
  #[serde(rename = "parent")]
  Parent(SourceAnchor),
}

impl Location {
  /// The resolved anchor, whichever element it came from.
  pub const fn anchor(&self) -> &SourceAnchor {
    match self {
      Location::Exact(anchor) | Location::Parent(anchor) => anchor,
    }
  }

  /// True when the element itself is annotated.
  pub const fn is_exact(&self) -> bool {
    matches!(self, Location::Exact(_))
  }

  /// Consume into the anchor.
  pub fn into_anchor(self) -> SourceAnchor {
    match self {
      Location::Exact(anchor) | Location::Parent(anchor) => anchor,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn exact_serializes_as_self() {
    let location = Location::Exact(SourceAnchor::new("pages/index.astro", 12));
    assert_eq!(
      serde_json::to_value(&location).unwrap(),
      json!({ "type": "self", "filePath": "pages/index.astro", "lineNumber": 12 })
    );
  }

  #[test]
  fn parent_serializes_as_parent() {
    let location = Location::Parent(SourceAnchor::new("layout.astro", 4));
    assert_eq!(
      serde_json::to_value(&location).unwrap(),
      json!({ "type": "parent", "filePath": "layout.astro", "lineNumber": 4 })
    );
  }

  #[test]
  fn anchor_display() {
    assert_eq!(SourceAnchor::new("a/b.astro", 7).to_string(), "a/b.astro:7");
  }
}
