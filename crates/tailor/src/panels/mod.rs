/*!
Tool panels: per-tool interactive state.

A panel is mounted against the selected element when its tool is chosen and
unmounted when the tool is reset. Submitting produces at most one
[`EditIntent`]; the inspector dispatches it.
*/

mod class_edit;
mod link;
mod locate;
mod magic;
mod text_edit;

pub use class_edit::ClassEditPanel;
pub use link::LinkUpdatePanel;
pub use locate::LocatePanel;
pub use magic::MagicPanel;
pub use text_edit::{TextEditPanel, TEXT_EDIT_HINT};

use crate::platform::DomNode;
use crate::types::{EditIntent, Location, TailorResult, Tool};

/// The open panel of the active tool.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
  /// Magic instruction form.
  Magic(MagicPanel),
  /// Class list and new-class input.
  ClassEdit(ClassEditPanel),
  /// In-place text edit.
  EditText(TextEditPanel),
  /// Source location readout.
  Locate(LocatePanel),
  /// New `href` input.
  LinkUpdate(LinkUpdatePanel),
}

impl Panel {
  /// Mount `tool`'s panel on `element`.
  pub(crate) fn mount<N: DomNode>(tool: Tool, element: &N, location: Option<&Location>) -> Self {
    match tool {
      Tool::Magic => Panel::Magic(MagicPanel::default()),
      Tool::ClassEdit => Panel::ClassEdit(ClassEditPanel::mount(element)),
      Tool::EditText => Panel::EditText(TextEditPanel::mount(element)),
      Tool::Locate => Panel::Locate(LocatePanel::mount(location)),
      Tool::LinkUpdate => Panel::LinkUpdate(LinkUpdatePanel::mount(element)),
    }
  }

  /// The tool that opened this panel.
  pub const fn tool(&self) -> Tool {
    match self {
      Panel::Magic(_) => Tool::Magic,
      Panel::ClassEdit(_) => Tool::ClassEdit,
      Panel::EditText(_) => Tool::EditText,
      Panel::Locate(_) => Tool::Locate,
      Panel::LinkUpdate(_) => Tool::LinkUpdate,
    }
  }

  /// Whether the submit control is enabled.
  pub fn can_submit(&self, location: Option<&Location>) -> bool {
    match self {
      Panel::Magic(panel) => panel.can_submit(location),
      Panel::ClassEdit(panel) => panel.can_submit(location),
      Panel::EditText(_) => true,
      Panel::Locate(_) => false,
      Panel::LinkUpdate(panel) => panel.can_submit(location),
    }
  }

  /// Build the edit for the current input. Errors leave the panel open.
  pub(crate) fn submit<N: DomNode>(
    &mut self,
    element: &N,
    location: Option<&Location>,
  ) -> TailorResult<Option<EditIntent>> {
    match self {
      Panel::Magic(panel) => panel.submit(location).map(Some),
      Panel::ClassEdit(panel) => panel.submit(location).map(Some),
      Panel::EditText(panel) => Ok(panel.confirm(element, location)),
      Panel::Locate(_) => Ok(None),
      Panel::LinkUpdate(panel) => panel.submit(location).map(Some),
    }
  }

  /// Abandon the panel's input and undo any page changes.
  pub(crate) fn cancel<N: DomNode>(&mut self, element: &N) {
    if let Panel::EditText(panel) = self {
      panel.cancel(element);
    }
  }

  /// Called when the panel closes for any reason.
  pub(crate) fn unmount<N: DomNode>(&mut self, element: &N) {
    self.cancel(element);
  }

  /// The Magic form, if that is what is open.
  pub fn as_magic_mut(&mut self) -> Option<&mut MagicPanel> {
    match self {
      Panel::Magic(panel) => Some(panel),
      _ => None,
    }
  }

  /// The class form, if that is what is open.
  pub fn as_class_edit_mut(&mut self) -> Option<&mut ClassEditPanel> {
    match self {
      Panel::ClassEdit(panel) => Some(panel),
      _ => None,
    }
  }

  /// The link form, if that is what is open.
  pub fn as_link_update_mut(&mut self) -> Option<&mut LinkUpdatePanel> {
    match self {
      Panel::LinkUpdate(panel) => Some(panel),
      _ => None,
    }
  }
}

/// Input rule shared by text-entry panels: something other than whitespace.
fn has_input(value: &str) -> bool {
  !value.trim().is_empty()
}
