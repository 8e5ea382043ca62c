/*!
JS entry point.

```js
import init, { Tailor } from "tailor-web";

await init();
const tailor = new Tailor({ logLevel: "debug" });
```
*/

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tailor::{Inspector, InspectorBuilder, Point, TailorResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::config::WebConfig;
use crate::dom::WebNode;
use crate::host::ParentFrameHost;
use crate::platform::{js_error_message, EventHandler, Handlers, WebPlatform};
use crate::ui::{Field, UiAction};
use crate::view::{action_of, field_of, View};

type WebInspector = Inspector<WebPlatform, ParentFrameHost>;

/// Inspector plus its chrome. Lives in a shared slot that event handlers reach
/// through a weak reference.
struct Overlay {
  inspector: WebInspector,
  view: View,
}

type Slot = Rc<RefCell<Option<Overlay>>>;

impl Overlay {
  fn render(&mut self) {
    if let Err(e) = self.view.render(&self.inspector) {
      log::error!("Overlay render failed: {}", js_error_message(&e));
    }
  }

  fn on_hover(&mut self, event: &Event) -> TailorResult<()> {
    let position = pointer_position(event).unwrap_or_else(|| self.inspector.pointer());
    self.inspector.handle_hover(WebNode::from_event(event), position)
  }

  fn on_pointer_up(&mut self, event: &Event) -> TailorResult<()> {
    self
      .inspector
      .handle_pointer_up(WebNode::from_event(event), pointer_position(event))
  }

  /// Scroll, resize, pointer movement or typing: only the geometry changed.
  /// [`with_overlay`] redraws afterwards, rereading every rect.
  #[allow(clippy::unnecessary_wraps)]
  fn on_reflow(&mut self, _event: &Event) -> TailorResult<()> {
    Ok(())
  }

  /// Capture-phase page click: keep the page from reacting while inspecting.
  fn on_page_click(&mut self, event: &Event) -> TailorResult<()> {
    if WebNode::from_event(event).is_some_and(|node| self.inspector.is_excluded(&node)) {
      return Ok(());
    }
    event.prevent_default();
    event.stop_propagation();
    Ok(())
  }

  fn on_ui_click(&mut self, event: &Event) -> TailorResult<()> {
    let Some(action) = event_element(event).and_then(|target| action_of(&target)) else {
      return Ok(());
    };
    log::debug!("UI action {action:?}");
    match action {
      UiAction::Toggle => self.inspector.toggle().map(drop),
      UiAction::Tool(tool) => self.inspector.select_tool(tool),
      UiAction::Submit => self.inspector.submit_panel(),
      UiAction::Cancel => self.inspector.cancel_panel(),
    }
  }

  fn on_ui_input(&mut self, event: &Event) -> TailorResult<()> {
    let Some((field, value)) = event_element(event).and_then(|target| field_of(&target)) else {
      return Ok(());
    };
    let Some(panel) = self.inspector.panel_mut() else {
      return Ok(());
    };
    match field {
      Field::Instruction => {
        if let Some(magic) = panel.as_magic_mut() {
          magic.set_instruction(value);
        }
      }
      Field::Class => {
        if let Some(class_edit) = panel.as_class_edit_mut() {
          class_edit.set_new_class(value);
        }
      }
      Field::Href => {
        if let Some(link) = panel.as_link_update_mut() {
          link.set_new_href(value);
        }
      }
    }
    Ok(())
  }
}

fn pointer_position(event: &Event) -> Option<Point> {
  event
    .dyn_ref::<MouseEvent>()
    .map(|e| Point::new(f64::from(e.client_x()), f64::from(e.client_y())))
}

fn event_element(event: &Event) -> Option<Element> {
  event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// Run `f` against the overlay, log its error, and redraw.
fn with_overlay(slot: &Weak<RefCell<Option<Overlay>>>, f: impl FnOnce(&mut Overlay) -> TailorResult<()>) {
  let Some(slot) = slot.upgrade() else {
    return;
  };
  let Ok(mut guard) = slot.try_borrow_mut() else {
    log::warn!("Ignoring re-entrant event");
    return;
  };
  let Some(overlay) = guard.as_mut() else {
    return;
  };
  if let Err(e) = f(overlay) {
    log::warn!("{e}");
  }
  overlay.render();
}

fn handler(slot: &Slot, f: fn(&mut Overlay, &Event) -> TailorResult<()>) -> EventHandler {
  let slot = Rc::downgrade(slot);
  Closure::new(move |event: Event| with_overlay(&slot, |overlay| f(overlay, &event)))
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
  js_sys::Error::new(&e.to_string()).into()
}

/// The inspector overlay, mounted on the current page.
#[wasm_bindgen]
pub struct Tailor {
  slot: Slot,
  _ui_click: EventHandler,
  _ui_input: EventHandler,
}

impl std::fmt::Debug for Tailor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Tailor")
      .field("active", &self.is_active())
      .finish_non_exhaustive()
  }
}

#[wasm_bindgen]
impl Tailor {
  /// Mount the overlay. `config` is an optional options object.
  #[wasm_bindgen(constructor)]
  pub fn new(config: JsValue) -> Result<Tailor, JsValue> {
    console_error_panic_hook::set_once();

    let config = if config.is_undefined() || config.is_null() {
      WebConfig::default()
    } else {
      let json = js_sys::JSON::stringify(&config)?
        .as_string()
        .unwrap_or_default();
      WebConfig::from_json(&json).map_err(to_js)?
    };
    crate::logger::init(config.log_level());

    let window = web_sys::window().ok_or_else(|| to_js("no window"))?;
    let document = window.document().ok_or_else(|| to_js("no document"))?;

    let slot: Slot = Rc::default();
    let handlers = Handlers {
      hover: handler(&slot, Overlay::on_hover),
      select_click: handler(&slot, Overlay::on_pointer_up),
      retarget_click: handler(&slot, Overlay::on_pointer_up),
      suppress_clicks: handler(&slot, Overlay::on_page_click),
      reflow: handler(&slot, Overlay::on_reflow),
    };
    let ui_click = handler(&slot, Overlay::on_ui_click);
    let ui_input = handler(&slot, Overlay::on_ui_input);

    let exclusion_class = config.inspector.exclusion_class.clone();
    let inspector = InspectorBuilder::from_config(config.inspector)
      .build(
        WebPlatform::new(window.clone(), document.clone(), handlers),
        ParentFrameHost::new(window),
      )
      .map_err(to_js)?;
    let view = View::mount(&document, &exclusion_class, &ui_click, &ui_input)?;

    let mut overlay = Overlay { inspector, view };
    overlay.render();
    *slot.borrow_mut() = Some(overlay);
    log::info!("Tailor mounted");

    Ok(Tailor {
      slot,
      _ui_click: ui_click,
      _ui_input: ui_input,
    })
  }

  /// Same as the toolbar toggle button.
  pub fn toggle(&self) -> Result<(), JsValue> {
    let mut guard = self.slot.try_borrow_mut().map_err(to_js)?;
    let overlay = guard.as_mut().ok_or_else(|| to_js("destroyed"))?;
    let result = overlay.inspector.toggle();
    overlay.render();
    result.map(drop).map_err(to_js)
  }

  /// True while inspecting or selected.
  #[wasm_bindgen(js_name = isActive)]
  pub fn is_active(&self) -> bool {
    self
      .slot
      .try_borrow()
      .ok()
      .and_then(|guard| guard.as_ref().map(|overlay| overlay.inspector.mode().is_active()))
      .unwrap_or(false)
  }

  /// Return to idle, detach everything and remove the chrome.
  pub fn destroy(&self) {
    let Ok(mut guard) = self.slot.try_borrow_mut() else {
      log::warn!("destroy called from inside an event handler");
      return;
    };
    if let Some(mut overlay) = guard.take() {
      // Going idle detaches every listener and releases the click suppressor.
      if overlay.inspector.mode().is_active() {
        if let Err(e) = overlay.inspector.toggle() {
          log::warn!("{e}");
        }
      }
      overlay.view.unmount();
    }
  }
}
