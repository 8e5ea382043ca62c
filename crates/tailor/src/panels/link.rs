/*! Link update: replaces a hyperlink's href. */

use super::has_input;
use crate::platform::DomNode;
use crate::types::{EditIntent, Location, TailorError, TailorResult};

/// Replaces an anchor's `href`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkUpdatePanel {
  old_href: String,
  new_href: String,
}

impl LinkUpdatePanel {
  /// Pre-fills the input with the current href.
  pub(crate) fn mount<N: DomNode>(element: &N) -> Self {
    let href = element.href().unwrap_or_default();
    Self {
      old_href: href.clone(),
      new_href: href,
    }
  }

  /// `href` at mount.
  pub fn old_href(&self) -> &str {
    &self.old_href
  }

  /// Replacement typed so far.
  pub fn new_href(&self) -> &str {
    &self.new_href
  }

  /// Replace the typed href.
  pub fn set_new_href(&mut self, href: impl Into<String>) {
    self.new_href = href.into();
  }

  /// Needs a new href and the element's own location.
  pub fn can_submit(&self, location: Option<&Location>) -> bool {
    has_input(&self.new_href) && location.is_some_and(Location::is_exact)
  }

  pub(crate) fn submit(&self, location: Option<&Location>) -> TailorResult<EditIntent> {
    if !has_input(&self.new_href) {
      return Err(TailorError::IncompleteInput("href"));
    }
    match location {
      Some(Location::Exact(anchor)) => Ok(EditIntent::precise(
        format!("Update link {} to {}", self.old_href, self.new_href),
        anchor.clone(),
      )),
      _ => Err(TailorError::Unanchored),
    }
  }
}
