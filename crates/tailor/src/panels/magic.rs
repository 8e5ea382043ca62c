/*! Magic: a free-form instruction anchored at the element's source line. */

use super::has_input;
use crate::types::{EditIntent, Location, TailorError, TailorResult};

/// Free-form instruction for the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagicPanel {
  instruction: String,
}

impl MagicPanel {
  /// Instruction typed so far.
  pub fn instruction(&self) -> &str {
    &self.instruction
  }

  /// Replace the instruction.
  pub fn set_instruction(&mut self, instruction: impl Into<String>) {
    self.instruction = instruction.into();
  }

  /// Needs an instruction and a location.
  pub fn can_submit(&self, location: Option<&Location>) -> bool {
    has_input(&self.instruction) && location.is_some()
  }

  /// Always precise: a parent location contributes its file and line as-is.
  pub(crate) fn submit(&self, location: Option<&Location>) -> TailorResult<EditIntent> {
    if !has_input(&self.instruction) {
      return Err(TailorError::IncompleteInput("instruction"));
    }
    let anchor = location.map(Location::anchor).ok_or(TailorError::Unanchored)?;
    Ok(EditIntent::precise(self.instruction.clone(), anchor.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::SourceAnchor;

  #[test]
  fn parent_location_is_sent_as_precise() {
    let mut panel = MagicPanel::default();
    panel.set_instruction("make it pop");
    let location = Location::Parent(SourceAnchor::new("layout.astro", 8));

    assert_eq!(
      panel.submit(Some(&location)).unwrap(),
      EditIntent::precise("make it pop", SourceAnchor::new("layout.astro", 8))
    );
  }

  #[test]
  fn empty_or_unanchored_is_refused() {
    let mut panel = MagicPanel::default();
    let location = Location::Exact(SourceAnchor::new("a.astro", 1));
    assert!(!panel.can_submit(Some(&location)));
    assert!(matches!(
      panel.submit(Some(&location)),
      Err(TailorError::IncompleteInput(_))
    ));

    panel.set_instruction("bigger");
    assert!(!panel.can_submit(None));
    assert!(matches!(panel.submit(None), Err(TailorError::Unanchored)));
  }
}
