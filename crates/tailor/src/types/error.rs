/*! Error types for inspector operations. */

use super::Tool;
use crate::platform::Listener;

/// Errors that can occur during inspector operations.
#[derive(Debug, thiserror::Error)]
pub enum TailorError {
  #[error("Failed to attach {listener:?} listener: {reason}")]
  ListenerAttach { listener: Listener, reason: String },

  #[error("Host rejected message: {0}")]
  Host(String),

  #[error("Failed to serialize message: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("Invalid config: {0}")]
  InvalidConfig(String),

  #[error("No element is selected")]
  NothingSelected,

  #[error("Tool '{tool}' does not apply to the selected element")]
  ToolUnavailable { tool: Tool },

  #[error("No tool panel is open")]
  NoActivePanel,

  #[error("Panel input incomplete: {0}")]
  IncompleteInput(&'static str),

  #[error("Element has no source location to anchor the edit")]
  Unanchored,
}

/// Result type for inspector operations.
pub type TailorResult<T> = Result<T, TailorError>;
