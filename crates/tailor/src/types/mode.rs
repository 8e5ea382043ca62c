/*! Inspection mode. */

use super::Point;

/// The inspector's current mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
  /// Overlay inactive, nothing tracked.
  #[default]
  Idle,
  /// Hover highlights elements; a click selects.
  Inspecting,
  /// One element is pinned.
  Selected {
    /// Where the selection happened: the pointer position, else the
    /// element's top-left corner. Informational only; the toolbar is placed
    /// from the element's live rect.
    anchor: Point,
  },
}

impl Mode {
  /// True for any mode other than `Idle`.
  pub const fn is_active(&self) -> bool {
    !matches!(self, Mode::Idle)
  }

  /// True while an element is pinned.
  pub const fn is_selected(&self) -> bool {
    matches!(self, Mode::Selected { .. })
  }
}
