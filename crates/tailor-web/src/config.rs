/*!
Options accepted by the JS constructor.

Inspector options sit at the top level next to `logLevel`:

```
let config = tailor_web::WebConfig::from_json(r#"{ "logLevel": "debug", "pathPrefixDepth": 4 }"#).unwrap();
assert_eq!(config.log_level(), log::LevelFilter::Debug);
assert_eq!(config.inspector.path_prefix_depth, 4);
```
*/

use log::LevelFilter;
use serde::Deserialize;
use tailor::InspectorConfig;

/// Options passed to `new Tailor(...)`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebConfig {
  /// Inspector options, flattened into the same object.
  #[serde(flatten)]
  pub inspector: InspectorConfig,
  /// `off`, `error`, `warn`, `info`, `debug` or `trace`. Default: `info`.
  pub log_level: Option<String>,
}

impl WebConfig {
  /// Parse options from JSON. Missing fields take defaults.
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  /// Console log level. Unknown names fall back to `info`.
  pub fn log_level(&self) -> LevelFilter {
    self
      .log_level
      .as_deref()
      .and_then(|name| name.parse().ok())
      .unwrap_or(LevelFilter::Info)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_object_is_default() {
    let config = WebConfig::from_json("{}").unwrap();
    assert_eq!(config.inspector, InspectorConfig::default());
    assert_eq!(config.log_level(), LevelFilter::Info);
  }

  #[test]
  fn inspector_options_are_flattened() {
    let config = WebConfig::from_json(
      r#"{ "exclusionClass": "my-overlay", "toolbarWidth": 300, "logLevel": "WARN" }"#,
    )
    .unwrap();
    assert_eq!(config.inspector.exclusion_class, "my-overlay");
    assert_eq!(config.inspector.toolbar_width, 300.0);
    assert_eq!(config.log_level(), LevelFilter::Warn);
  }

  #[test]
  fn unknown_level_falls_back() {
    let config = WebConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap();
    assert_eq!(config.log_level(), LevelFilter::Info);
  }
}
