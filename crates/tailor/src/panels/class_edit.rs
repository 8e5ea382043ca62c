/*! CSS class edit: adds one class to the element's source. */

use super::has_input;
use crate::platform::DomNode;
use crate::types::{EditIntent, Location, TailorError, TailorResult};

/// Adds a class to the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassEditPanel {
  classes: Vec<String>,
  new_class: String,
}

impl ClassEditPanel {
  pub(crate) fn mount<N: DomNode>(element: &N) -> Self {
    Self {
      classes: element.class_list(),
      new_class: String::new(),
    }
  }

  /// Classes on the element when the panel opened.
  pub fn classes(&self) -> &[String] {
    &self.classes
  }

  /// Class typed so far.
  pub fn new_class(&self) -> &str {
    &self.new_class
  }

  /// Replace the typed class.
  pub fn set_new_class(&mut self, class: impl Into<String>) {
    self.new_class = class.into();
  }

  /// Needs a class and the element's own location.
  pub fn can_submit(&self, location: Option<&Location>) -> bool {
    has_input(&self.new_class) && location.is_some_and(Location::is_exact)
  }

  pub(crate) fn submit(&self, location: Option<&Location>) -> TailorResult<EditIntent> {
    let class = self.new_class.trim();
    if class.is_empty() {
      return Err(TailorError::IncompleteInput("class"));
    }
    match location {
      Some(Location::Exact(anchor)) => Ok(EditIntent::precise(format!("Add class {class}"), anchor.clone())),
      _ => Err(TailorError::Unanchored),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::memory::MemoryDom;
  use crate::types::SourceAnchor;

  #[test]
  fn lists_current_classes() {
    let dom = MemoryDom::new();
    let div = dom.body().append_element("div");
    div.add_class("card");
    div.add_class("shadow");

    let panel = ClassEditPanel::mount(&div);
    assert_eq!(panel.classes(), ["card", "shadow"]);
    assert_eq!(panel.new_class(), "");
  }

  #[test]
  fn submits_precise_add_class() {
    let mut panel = ClassEditPanel::default();
    panel.set_new_class(" rounded ");
    let location = Location::Exact(SourceAnchor::new("pages/index.astro", 12));

    assert!(panel.can_submit(Some(&location)));
    assert_eq!(
      panel.submit(Some(&location)).unwrap(),
      EditIntent::precise("Add class rounded", SourceAnchor::new("pages/index.astro", 12))
    );
  }

  #[test]
  fn requires_input_and_exact_location() {
    let mut panel = ClassEditPanel::default();
    let exact = Location::Exact(SourceAnchor::new("a.astro", 1));
    assert!(!panel.can_submit(Some(&exact)), "empty input disables submit");
    assert!(matches!(panel.submit(Some(&exact)), Err(TailorError::IncompleteInput(_))));

    panel.set_new_class("wide");
    let parent = Location::Parent(SourceAnchor::new("a.astro", 1));
    assert!(matches!(panel.submit(Some(&parent)), Err(TailorError::Unanchored)));
  }
}
