/*!
`DomNode` over live `web_sys` elements.

Geometry follows the CSS box model: the bounding client rect is the border
box; margins grow it, border widths and padding shrink it.
*/

use std::cell::OnceCell;

use tailor::platform::{DomNode, NodeKind};
use tailor::{BoxModel, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlAnchorElement, HtmlElement, Node};

use crate::style::read_spacing;

thread_local! {
  /// Shared one-shot capture listener that swallows a click.
  static CLICK_SUPPRESSOR: OnceCell<Closure<dyn FnMut(Event)>> = const { OnceCell::new() };
}

fn with_click_suppressor(f: impl FnOnce(&js_sys::Function)) {
  CLICK_SUPPRESSOR.with(|cell| {
    let closure = cell.get_or_init(|| {
      Closure::new(|event: Event| {
        event.prevent_default();
        event.stop_propagation();
      })
    });
    f(closure.as_ref().unchecked_ref());
  });
}

/// A page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(Element);

impl WebNode {
  /// Wrap an element.
  pub const fn new(element: Element) -> Self {
    Self(element)
  }

  /// Wrap an event target if it is an element.
  pub fn from_event(event: &Event) -> Option<Self> {
    event
      .target()
      .and_then(|target| target.dyn_into::<Element>().ok())
      .map(Self)
  }

  /// The wrapped element.
  pub const fn element(&self) -> &Element {
    &self.0
  }

  fn html(&self) -> Option<&HtmlElement> {
    self.0.dyn_ref::<HtmlElement>()
  }
}

impl DomNode for WebNode {
  fn tag_name(&self) -> String {
    self.0.tag_name().to_ascii_lowercase()
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self.0.get_attribute(name)
  }

  fn parent(&self) -> Option<Self> {
    self.0.parent_element().map(Self)
  }

  fn has_class(&self, class: &str) -> bool {
    self.0.class_list().contains(class)
  }

  fn class_list(&self) -> Vec<String> {
    let list = self.0.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
  }

  fn child_kinds(&self) -> Vec<NodeKind> {
    let children = self.0.child_nodes();
    (0..children.length())
      .filter_map(|i| children.item(i))
      .map(|child| match child.node_type() {
        Node::ELEMENT_NODE => NodeKind::Element,
        Node::TEXT_NODE => NodeKind::Text,
        _ => NodeKind::Other,
      })
      .collect()
  }

  fn text_content(&self) -> Option<String> {
    self.0.text_content()
  }

  fn set_text_content(&self, text: &str) {
    self.0.set_text_content(Some(text));
  }

  fn href(&self) -> Option<String> {
    self.0.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href)
  }

  fn descendants(&self) -> Vec<Self> {
    let Ok(nodes) = self.0.query_selector_all("*") else {
      return Vec::new();
    };
    (0..nodes.length())
      .filter_map(|i| nodes.item(i))
      .filter_map(|node| node.dyn_into::<Element>().ok())
      .map(Self)
      .collect()
  }

  fn set_editable(&self, editable: bool) {
    if let Some(html) = self.html() {
      html.set_content_editable(if editable { "true" } else { "false" });
    }
  }

  fn is_editable(&self) -> bool {
    self.html().is_some_and(HtmlElement::is_content_editable)
  }

  fn focus(&self) {
    if let Some(Err(e)) = self.html().map(HtmlElement::focus) {
      log::warn!("focus failed: {e:?}");
    }
  }

  fn box_model(&self) -> BoxModel {
    let border_box = self.bounding_rect();
    let style = web_sys::window().and_then(|window| window.get_computed_style(&self.0).ok().flatten());
    let Some(style) = style else {
      return BoxModel::flat(border_box);
    };

    let read = |name: &str| style.get_property_value(name).unwrap_or_default();
    BoxModel::from_border_box(
      border_box,
      read_spacing(read, "margin", ""),
      read_spacing(read, "border", "-width"),
      read_spacing(read, "padding", ""),
    )
  }

  fn bounding_rect(&self) -> Rect {
    let rect = self.0.get_bounding_client_rect();
    Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
  }

  fn suppress_next_click(&self) {
    with_click_suppressor(|f| {
      let options = web_sys::AddEventListenerOptions::new();
      options.set_capture(true);
      options.set_once(true);
      if let Err(e) = self
        .0
        .add_event_listener_with_callback_and_add_event_listener_options("click", f, &options)
      {
        log::warn!("click suppressor not installed: {e:?}");
      }
    });
  }

  fn release_click_suppression(&self) {
    with_click_suppressor(|f| {
      if let Err(e) = self.0.remove_event_listener_with_callback_and_bool("click", f, true) {
        log::warn!("click suppressor not removed: {e:?}");
      }
    });
  }
}
