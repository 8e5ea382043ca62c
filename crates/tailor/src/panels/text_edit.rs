/*!
Text edit: makes the element itself editable in place.

Descendants are explicitly made non-editable first so nested interactive
content is untouched. Confirm and cancel both leave the element
non-editable; cancel also restores the original text.
*/

use crate::platform::DomNode;
use crate::types::{EditIntent, Location};

/// Shown while the element is editable.
pub const TEXT_EDIT_HINT: &str = "Start typing!";

/// Edits the element's text in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditPanel {
  original: String,
  editing: bool,
}

impl TextEditPanel {
  pub(crate) fn mount<N: DomNode>(element: &N) -> Self {
    for descendant in element.descendants() {
      descendant.set_editable(false);
    }
    let original = element.text_content().unwrap_or_default();
    element.set_editable(true);
    element.focus();
    Self {
      original,
      editing: true,
    }
  }

  /// Text captured before editing began.
  pub fn original(&self) -> &str {
    &self.original
  }

  /// False once confirmed or cancelled.
  pub const fn is_editing(&self) -> bool {
    self.editing
  }

  /// Finish editing and describe the change.
  ///
  /// Without a location there is nothing to anchor to, so the text is put
  /// back and nothing is returned.
  pub(crate) fn confirm<N: DomNode>(&mut self, element: &N, location: Option<&Location>) -> Option<EditIntent> {
    element.set_editable(false);
    self.editing = false;
    let current = element.text_content().unwrap_or_default();

    let Some(location) = location else {
      log::warn!("Text edit on <{}> has no source location, reverting", element.tag_name());
      element.set_text_content(&self.original);
      return None;
    };

    Some(EditIntent::for_location(
      format!("Edit text from {} to {}", self.original, current),
      location.clone(),
    ))
  }

  /// Restore the original text and stop editing. No-op once finished.
  pub(crate) fn cancel<N: DomNode>(&mut self, element: &N) {
    if !self.editing {
      return;
    }
    element.set_editable(false);
    element.set_text_content(&self.original);
    self.editing = false;
  }
}
