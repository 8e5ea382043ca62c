/*! Tool identities. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user-selectable capability scoped to the selected element.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Tool {
  /// Free-form natural language instruction.
  Magic,
  /// Add a class to the element.
  ClassEdit,
  /// Edit the element's text in place.
  EditText,
  /// Reveal the element's source location to the host.
  Locate,
  /// Change the element's href.
  LinkUpdate,
}

impl Tool {
  /// Human-readable tool name, shown as the button tooltip.
  pub const fn label(self) -> &'static str {
    match self {
      Tool::Magic => "Magic",
      Tool::ClassEdit => "Update CSS",
      Tool::EditText => "Edit Text",
      Tool::Locate => "Locate",
      Tool::LinkUpdate => "Update Link",
    }
  }
}

impl std::fmt::Display for Tool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}
