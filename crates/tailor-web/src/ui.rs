/*!
Overlay chrome wiring.

The overlay uses one delegated click listener and one delegated input
listener. Controls are tagged with data attributes naming what they do.
*/

use tailor::Tool;

/// Attribute naming a control's action.
pub const ACTION_ATTRIBUTE: &str = "data-tailor-action";
/// Attribute naming the panel field an input edits.
pub const FIELD_ATTRIBUTE: &str = "data-tailor-field";

/// What a clicked control asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
  /// The toggle button.
  Toggle,
  /// A tool button.
  Tool(Tool),
  /// Panel submit.
  Submit,
  /// Panel cancel or close.
  Cancel,
}

impl UiAction {
  /// Value for [`ACTION_ATTRIBUTE`].
  pub fn to_attribute(self) -> String {
    match self {
      UiAction::Toggle => "toggle".to_string(),
      UiAction::Tool(tool) => format!("tool:{}", tool_slug(tool)),
      UiAction::Submit => "submit".to_string(),
      UiAction::Cancel => "cancel".to_string(),
    }
  }

  /// Inverse of [`UiAction::to_attribute`].
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "toggle" => Some(UiAction::Toggle),
      "submit" => Some(UiAction::Submit),
      "cancel" => Some(UiAction::Cancel),
      other => other
        .strip_prefix("tool:")
        .and_then(parse_tool)
        .map(UiAction::Tool),
    }
  }
}

/// A panel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  /// Magic instruction.
  Instruction,
  /// New class name.
  Class,
  /// New link target.
  Href,
}

impl Field {
  /// Value for [`FIELD_ATTRIBUTE`].
  pub const fn as_attribute(self) -> &'static str {
    match self {
      Field::Instruction => "instruction",
      Field::Class => "class",
      Field::Href => "href",
    }
  }

  /// Inverse of [`Field::as_attribute`].
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "instruction" => Some(Field::Instruction),
      "class" => Some(Field::Class),
      "href" => Some(Field::Href),
      _ => None,
    }
  }
}

/// The tool's wire name (`class-edit`, `edit-text`, ...).
fn tool_slug(tool: Tool) -> String {
  serde_json::to_value(tool)
    .ok()
    .and_then(|value| value.as_str().map(str::to_owned))
    .unwrap_or_default()
}

fn parse_tool(slug: &str) -> Option<Tool> {
  serde_json::from_value(serde_json::Value::String(slug.to_owned())).ok()
}
