/*! Outbound message types posted to the host frame. */

use super::{Location, SourceAnchor};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A structured description of a desired source change.
///
/// `action` is always human-readable prose; the host interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export)]
pub enum EditIntent {
  /// Anchored to an exact source line.
  #[serde(rename_all = "camelCase")]
  Precise {
    action: String,
    file_path: String,
    line_number: u32,
  },
  /// Not anchorable; carries the nearest annotated ancestor as a hint.
  #[serde(rename_all = "camelCase")]
  Imprecise {
    action: String,
    precise_parent: SourceAnchor,
  },
}

impl EditIntent {
  /// Edit anchored exactly at `anchor`.
  pub fn precise(action: impl Into<String>, anchor: SourceAnchor) -> Self {
    EditIntent::Precise {
      action: action.into(),
      file_path: anchor.file_path,
      line_number: anchor.line_number,
    }
  }

  /// Edit that can only point at an ancestor.
  pub fn imprecise(action: impl Into<String>, precise_parent: SourceAnchor) -> Self {
    EditIntent::Imprecise {
      action: action.into(),
      precise_parent,
    }
  }

  /// `Precise` for an exact location, `Imprecise` for an inherited one.
  pub fn for_location(action: impl Into<String>, location: Location) -> Self {
    match location {
      Location::Exact(anchor) => Self::precise(action, anchor),
      Location::Parent(anchor) => Self::imprecise(action, anchor),
    }
  }

  /// The human-readable action text.
  pub fn action(&self) -> &str {
    match self {
      EditIntent::Precise { action, .. } | EditIntent::Imprecise { action, .. } => action,
    }
  }
}

/// Request headers forwarded with an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiHeaders {
  #[serde(rename = "Content-Type")]
  pub content_type: String,
}

impl Default for ApiHeaders {
  fn default() -> Self {
    Self {
      content_type: "application/json".to_string(),
    }
  }
}

/// Body of an `apiCall` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiCallBody {
  pub edit: EditIntent,
}

/// Every message this overlay posts to its parent frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum OutboundMessage {
  /// An edit intent for the host's build/content pipeline.
  ApiCall {
    /// Page the edit was made on.
    url: String,
    body: ApiCallBody,
    headers: ApiHeaders,
  },
  /// Ask the host to reveal a source location.
  Locate { location: Location },
}

impl OutboundMessage {
  /// Wrap an edit intent for the page at `url`.
  pub fn api_call(url: impl Into<String>, edit: EditIntent) -> Self {
    OutboundMessage::ApiCall {
      url: url.into(),
      body: ApiCallBody { edit },
      headers: ApiHeaders::default(),
    }
  }
}
