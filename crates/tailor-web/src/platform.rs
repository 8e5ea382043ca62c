/*! Document-level listeners and viewport access. */

use tailor::platform::{Listener, Platform};
use tailor::{Size, TailorError, TailorResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, Window};

use crate::dom::WebNode;

/// Handler installed for a global listener.
pub type EventHandler = Closure<dyn FnMut(Event)>;

/// One handler per global listener. Created once, attached and detached many times.
pub struct Handlers {
  /// Pointer-move while inspecting.
  pub hover: EventHandler,
  /// Pointer-up while inspecting.
  pub select_click: EventHandler,
  /// Pointer-up while selected.
  pub retarget_click: EventHandler,
  /// Capturing page-click blocker.
  pub suppress_clicks: EventHandler,
  /// Redraw on scroll, resize, pointer movement and typing.
  pub reflow: EventHandler,
}

impl Handlers {
  fn get(&self, listener: Listener) -> &js_sys::Function {
    let handler = match listener {
      Listener::Hover => &self.hover,
      Listener::SelectClick => &self.select_click,
      Listener::RetargetClick => &self.retarget_click,
      Listener::SuppressClicks => &self.suppress_clicks,
      Listener::Reflow => &self.reflow,
    };
    handler.as_ref().unchecked_ref()
  }
}

/// Where a DOM listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
  Window,
  Document,
}

/// One DOM registration: scope, event type, capture flag.
type Registration = (Scope, &'static str, bool);

/// DOM registrations backing a listener.
const fn registrations(listener: Listener) -> &'static [Registration] {
  match listener {
    Listener::Hover => &[(Scope::Document, "pointermove", false)],
    Listener::SelectClick | Listener::RetargetClick => &[(Scope::Document, "pointerup", false)],
    Listener::SuppressClicks => &[(Scope::Document, "click", true)],
    // Scroll does not bubble; capturing on window sees nested scrollers too.
    Listener::Reflow => &[
      (Scope::Window, "scroll", true),
      (Scope::Window, "resize", false),
      (Scope::Document, "pointermove", false),
      (Scope::Document, "input", true),
    ],
  }
}

/// The live page.
pub struct WebPlatform {
  window: Window,
  document: Document,
  handlers: Handlers,
}

impl std::fmt::Debug for WebPlatform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WebPlatform").finish_non_exhaustive()
  }
}

impl WebPlatform {
  /// Wrap the page. Nothing is attached yet.
  pub const fn new(window: Window, document: Document, handlers: Handlers) -> Self {
    Self {
      window,
      document,
      handlers,
    }
  }

  /// The inspected document.
  pub const fn document(&self) -> &Document {
    &self.document
  }

  fn target(&self, scope: Scope) -> &EventTarget {
    match scope {
      Scope::Window => &self.window,
      Scope::Document => &self.document,
    }
  }

  fn remove(&self, listener: Listener, registrations: &[Registration]) {
    let handler = self.handlers.get(listener);
    for &(scope, event, capture) in registrations {
      if let Err(e) = self
        .target(scope)
        .remove_event_listener_with_callback_and_bool(event, handler, capture)
      {
        log::warn!("Failed to detach {listener:?} ({event}): {}", js_error_message(&e));
      }
    }
  }
}

impl Platform for WebPlatform {
  type Node = WebNode;

  /// Registers every DOM listener backing `listener`, or none of them.
  fn attach(&mut self, listener: Listener) -> TailorResult<()> {
    let all = registrations(listener);
    let handler = self.handlers.get(listener);
    for (done, &(scope, event, capture)) in all.iter().enumerate() {
      if let Err(e) = self
        .target(scope)
        .add_event_listener_with_callback_and_bool(event, handler, capture)
      {
        self.remove(listener, all.get(..done).unwrap_or_default());
        return Err(TailorError::ListenerAttach {
          listener,
          reason: js_error_message(&e),
        });
      }
    }
    Ok(())
  }

  fn detach(&mut self, listener: Listener) {
    self.remove(listener, registrations(listener));
  }

  fn viewport(&self) -> Size {
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(read(self.window.inner_width()), read(self.window.inner_height()))
  }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
  value
    .dyn_ref::<js_sys::Error>()
    .map(|e| String::from(e.message()))
    .or_else(|| value.as_string())
    .unwrap_or_else(|| format!("{value:?}"))
}
