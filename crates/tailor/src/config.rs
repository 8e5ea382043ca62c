/*!
Inspector configuration.

Every field has a default, so a partial JSON object deserializes:

```
use tailor::InspectorConfig;

let config: InspectorConfig = serde_json::from_str(r#"{ "toolbarWidth": 300 }"#).unwrap();
assert_eq!(config.toolbar_width, 300.0);
assert_eq!(config.exclusion_class, "exclude-tracking");
```
*/

use serde::Deserialize;

use crate::types::{Size, TailorError, TailorResult, Tool};

/// Marker class on the overlay's own chrome.
pub const DEFAULT_EXCLUSION_CLASS: &str = "exclude-tracking";
/// Attribute holding the absolute source file path.
pub const DEFAULT_SOURCE_FILE_ATTRIBUTE: &str = "data-astro-source-file";
/// Attribute holding `line:column`.
pub const DEFAULT_SOURCE_LOC_ATTRIBUTE: &str = "data-astro-source-loc";
/// Leading path segments dropped from the file path.
pub const DEFAULT_PATH_PREFIX_DEPTH: usize = 3;
/// Toolbar box edge length.
pub const DEFAULT_TOOLBAR_EDGE: f64 = 250.0;

/// Configuration for an inspector instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectorConfig {
  /// Events whose target lies inside an element with this class are ignored.
  pub exclusion_class: String,
  /// Attribute carrying the source file path.
  pub source_file_attribute: String,
  /// Attribute carrying `line:column`.
  pub source_loc_attribute: String,
  /// Leading path segments dropped from the file path.
  pub path_prefix_depth: usize,
  /// Toolbar width in CSS pixels.
  pub toolbar_width: f64,
  /// Toolbar height in CSS pixels.
  pub toolbar_height: f64,
  /// Tools that suspend click re-targeting while their panel is open.
  pub retarget_blocking_tools: Vec<Tool>,
}

impl Default for InspectorConfig {
  fn default() -> Self {
    Self {
      exclusion_class: DEFAULT_EXCLUSION_CLASS.to_string(),
      source_file_attribute: DEFAULT_SOURCE_FILE_ATTRIBUTE.to_string(),
      source_loc_attribute: DEFAULT_SOURCE_LOC_ATTRIBUTE.to_string(),
      path_prefix_depth: DEFAULT_PATH_PREFIX_DEPTH,
      toolbar_width: DEFAULT_TOOLBAR_EDGE,
      toolbar_height: DEFAULT_TOOLBAR_EDGE,
      retarget_blocking_tools: vec![Tool::EditText],
    }
  }
}

impl InspectorConfig {
  /// Check that the config can drive an inspector.
  pub fn validate(&self) -> TailorResult<()> {
    for (name, value) in [
      ("exclusionClass", &self.exclusion_class),
      ("sourceFileAttribute", &self.source_file_attribute),
      ("sourceLocAttribute", &self.source_loc_attribute),
    ] {
      if value.trim().is_empty() {
        return Err(TailorError::InvalidConfig(format!("{name} must not be empty")));
      }
    }

    for (name, value) in [
      ("toolbarWidth", self.toolbar_width),
      ("toolbarHeight", self.toolbar_height),
    ] {
      if !value.is_finite() || value <= 0.0 {
        return Err(TailorError::InvalidConfig(format!(
          "{name} must be positive, got {value}"
        )));
      }
    }

    Ok(())
  }

  /// Toolbar box size.
  pub const fn toolbar_size(&self) -> Size {
    Size::new(self.toolbar_width, self.toolbar_height)
  }

  /// Whether an open `tool` panel suspends click re-targeting.
  pub fn blocks_retarget(&self, tool: Tool) -> bool {
    self.retarget_blocking_tools.contains(&tool)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let config = InspectorConfig::default();
    assert_eq!(config.exclusion_class, "exclude-tracking");
    assert_eq!(config.path_prefix_depth, 3);
    assert_eq!(config.toolbar_size(), Size::new(250.0, 250.0));
    assert!(config.blocks_retarget(Tool::EditText));
    assert!(!config.blocks_retarget(Tool::ClassEdit));
    assert!(config.validate().is_ok());
  }

  #[test]
  fn partial_json_keeps_defaults() {
    let config: InspectorConfig =
      serde_json::from_str(r#"{ "retargetBlockingTools": ["edit-text", "link-update"], "pathPrefixDepth": 0 }"#)
        .unwrap();
    assert_eq!(config.path_prefix_depth, 0);
    assert_eq!(config.retarget_blocking_tools, vec![Tool::EditText, Tool::LinkUpdate]);
    assert_eq!(config.source_loc_attribute, DEFAULT_SOURCE_LOC_ATTRIBUTE);
  }

  #[test]
  fn rejects_empty_attribute() {
    let config = InspectorConfig {
      source_file_attribute: String::new(),
      ..InspectorConfig::default()
    };
    assert!(matches!(config.validate(), Err(TailorError::InvalidConfig(_))));
  }

  #[test]
  fn rejects_non_positive_toolbar() {
    let config = InspectorConfig {
      toolbar_width: 0.0,
      ..InspectorConfig::default()
    };
    assert!(matches!(config.validate(), Err(TailorError::InvalidConfig(_))));

    let config = InspectorConfig {
      toolbar_height: f64::NAN,
      ..InspectorConfig::default()
    };
    assert!(matches!(config.validate(), Err(TailorError::InvalidConfig(_))));
  }
}
