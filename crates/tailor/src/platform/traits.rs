/*!
Platform abstraction traits.

These traits define the contract between core code and the page.
The browser binding (and the in-memory document used by tests) implements them.
Core code only uses these traits - never `web_sys` types directly.
*/

use crate::types::{BoxModel, OutboundMessage, Rect, Size, TailorResult};

/// Kind of a direct child node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  /// An element node.
  Element,
  /// A text node.
  Text,
  /// Comments, processing instructions, etc.
  Other,
}

/// Handle to a live element in the host page. Clone is cheap (a reference).
///
/// The element belongs to the page, not to the inspector; equality means
/// "same element".
pub trait DomNode: Clone + PartialEq + std::fmt::Debug + 'static {
  /// Lowercase tag name (`p`, `a`, `h1`, ...).
  fn tag_name(&self) -> String;

  /// Attribute value, if present.
  fn attribute(&self, name: &str) -> Option<String>;

  /// Parent element. None at the document root.
  fn parent(&self) -> Option<Self>;

  /// Check the class list for `class`.
  fn has_class(&self, class: &str) -> bool;

  /// Current classes, in document order.
  fn class_list(&self) -> Vec<String>;

  /// Kinds of the direct child nodes (text nodes included).
  fn child_kinds(&self) -> Vec<NodeKind>;

  /// Concatenated text of all descendant text nodes.
  fn text_content(&self) -> Option<String>;

  /// Replace all children with a single text node.
  fn set_text_content(&self, text: &str);

  /// Resolved href, for hyperlinks only.
  fn href(&self) -> Option<String>;

  /// All descendant elements, in document order.
  fn descendants(&self) -> Vec<Self>;

  /// Toggle in-place editing.
  fn set_editable(&self, editable: bool);

  fn is_editable(&self) -> bool;

  fn focus(&self);

  /// Geometry adapter: the four CSS boxes, reread on every call.
  fn box_model(&self) -> BoxModel;

  /// Bounding client rect (the border box).
  fn bounding_rect(&self) -> Rect;

  /// Swallow the next click on this element, then remove the suppressor.
  fn suppress_next_click(&self);

  /// Remove a pending click suppressor, if any.
  fn release_click_suppression(&self);
}

/// Global page listeners whose lifetime follows the inspection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
  /// Pointer-move: tracks the element under the cursor.
  Hover,
  /// Pointer-up while inspecting: promotes to selected.
  SelectClick,
  /// Pointer-up while selected: re-targets to another element.
  RetargetClick,
  /// Capturing click listener that stops page handlers from firing.
  SuppressClicks,
  /// Scroll, resize and pointer movement: geometry may have changed, redraw.
  Reflow,
}

impl Listener {
  /// Every listener, in detach-safe order.
  pub const ALL: [Listener; 5] = [
    Listener::Hover,
    Listener::SelectClick,
    Listener::RetargetClick,
    Listener::SuppressClicks,
    Listener::Reflow,
  ];
}

/// Page-global operations.
pub trait Platform {
  /// Element handle type for this platform.
  type Node: DomNode;

  /// Install a global listener. Called only when not already attached.
  fn attach(&mut self, listener: Listener) -> TailorResult<()>;

  /// Remove a global listener. Called only when attached.
  fn detach(&mut self, listener: Listener);

  /// Current viewport size.
  fn viewport(&self) -> Size;
}

/// The frame that receives edit intents. One-way; there is no reply channel.
pub trait Host {
  /// URL of the inspected page.
  fn page_url(&self) -> String;

  /// Post a message. Delivery is not confirmed.
  fn post(&self, message: &OutboundMessage) -> TailorResult<()>;
}
