/*! Posts outbound messages to the embedding frame. */

use tailor::platform::Host;
use tailor::{OutboundMessage, TailorError, TailorResult};
use web_sys::Window;

use crate::platform::js_error_message;

/// `window.parent.postMessage(message, "*")`.
#[derive(Debug, Clone)]
pub struct ParentFrameHost {
  window: Window,
}

impl ParentFrameHost {
  /// Post through `window.parent`.
  pub const fn new(window: Window) -> Self {
    Self { window }
  }
}

impl Host for ParentFrameHost {
  fn page_url(&self) -> String {
    self.window.location().href().unwrap_or_default()
  }

  fn post(&self, message: &OutboundMessage) -> TailorResult<()> {
    let json = serde_json::to_string(message)?;
    let value = js_sys::JSON::parse(&json).map_err(|e| TailorError::Host(js_error_message(&e)))?;
    let parent = self
      .window
      .parent()
      .map_err(|e| TailorError::Host(js_error_message(&e)))?
      .ok_or_else(|| TailorError::Host("no parent frame".to_string()))?;
    parent
      .post_message(&value, "*")
      .map_err(|e| TailorError::Host(js_error_message(&e)))
  }
}
