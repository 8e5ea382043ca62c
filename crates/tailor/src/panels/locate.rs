/*! Locate: shows where the element lives. Dispatches on mount; no form. */

use crate::types::Location;

/// Shows where the element is defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatePanel {
  location: Option<Location>,
}

impl LocatePanel {
  pub(crate) fn mount(location: Option<&Location>) -> Self {
    Self {
      location: location.cloned(),
    }
  }

  /// Location captured at mount.
  pub const fn location(&self) -> Option<&Location> {
    self.location.as_ref()
  }

  /// `Location: file:line`, or None when unresolved.
  pub fn label(&self) -> Option<String> {
    self
      .location
      .as_ref()
      .map(|location| format!("Location: {}", location.anchor()))
  }
}
