/*!
Mode transitions.

Idle <-> Inspecting via toggle; Inspecting -> Selected on pointer-up;
Selected -> Selected on re-target; any active mode -> Idle via toggle.
*/

use super::Inspector;
use crate::platform::{DomNode, Host, Listener, Platform};
use crate::types::{Mode, Point, TailorResult};

/// True if `node` or any ancestor carries `class`.
pub(crate) fn within_class<N: DomNode>(node: &N, class: &str) -> bool {
  let mut current = Some(node.clone());
  while let Some(node) = current {
    if node.has_class(class) {
      return true;
    }
    current = node.parent();
  }
  false
}

impl<P: Platform, H: Host> Inspector<P, H> {
  /// Toolbar toggle. Idle enters Inspecting; any active mode returns to Idle.
  ///
  /// If a listener fails to attach the inspector falls back to Idle.
  pub fn toggle(&mut self) -> TailorResult<Mode> {
    if self.mode.is_active() {
      self.enter_idle();
      return Ok(self.mode);
    }

    self.mode = Mode::Inspecting;
    if let Err(e) = self.sync_listeners() {
      log::error!("Failed to start inspecting: {e}");
      self.enter_idle();
      return Err(e);
    }
    log::info!("Inspecting");
    Ok(self.mode)
  }

  /// Pointer moved over `target` (None when over nothing).
  pub fn handle_hover(&mut self, target: Option<P::Node>, position: Point) -> TailorResult<()> {
    if self.mode != Mode::Inspecting {
      return Ok(());
    }
    if target.as_ref().is_some_and(|t| self.is_excluded(t)) {
      return Ok(());
    }

    self.pointer = position;
    match target {
      Some(target) if self.tracked.as_ref() == Some(&target) => Ok(()),
      Some(target) => {
        self.reset_tool()?;
        self.track(target);
        Ok(())
      }
      None => {
        self.reset_tool()?;
        self.untrack();
        Ok(())
      }
    }
  }

  /// Pointer released over `target`.
  ///
  /// `position` is the pointer position when known; otherwise the selection
  /// anchors at the element's top-left corner.
  pub fn handle_pointer_up(&mut self, target: Option<P::Node>, position: Option<Point>) -> TailorResult<()> {
    let Some(target) = target else {
      return Ok(());
    };
    if self.is_excluded(&target) {
      return Ok(());
    }

    match self.mode {
      Mode::Idle => Ok(()),
      Mode::Inspecting => self.select(target, position),
      Mode::Selected { .. } => {
        if !self.listeners.contains(Listener::RetargetClick) {
          log::debug!("Re-target suspended while {:?} is open", self.tool);
          return Ok(());
        }
        if self.tracked.as_ref() == Some(&target) {
          return Ok(());
        }
        log::debug!("Re-targeting to <{}>", target.tag_name());
        self.select(target, position)
      }
    }
  }

  fn select(&mut self, target: P::Node, position: Option<Point>) -> TailorResult<()> {
    self.reset_tool()?;
    let anchor = position.unwrap_or_else(|| target.bounding_rect().origin());
    log::debug!("Selected <{}>", target.tag_name());
    self.track(target);
    self.mode = Mode::Selected { anchor };
    self.sync_listeners()
  }

  /// Close the open panel, if any. Reverts whatever the panel left on the page.
  pub(super) fn reset_tool(&mut self) -> TailorResult<()> {
    self.close_panel();
    self.sync_listeners()
  }

  pub(super) fn close_panel(&mut self) {
    if let Some(mut panel) = self.panel.take() {
      if let Some(element) = &self.tracked {
        panel.unmount(element);
      }
    }
    self.tool = None;
  }

  fn enter_idle(&mut self) {
    self.close_panel();
    self.untrack();
    self.mode = Mode::Idle;
    self.detach_stale(super::ListenerSet::EMPTY);
    log::info!("Idle");
  }

  /// Follow `target`, moving the one-shot click suppressor onto it.
  fn track(&mut self, target: P::Node) {
    if let Some(previous) = self.tracked.take() {
      previous.release_click_suppression();
    }
    target.suppress_next_click();
    self.tracked = Some(target);
  }

  fn untrack(&mut self) {
    if let Some(previous) = self.tracked.take() {
      previous.release_click_suppression();
    }
  }

  /// True if `node` belongs to the overlay's own chrome.
  pub fn is_excluded(&self, node: &P::Node) -> bool {
    within_class(node, &self.config.exclusion_class)
  }
}
