/*!
Overlay DOM.

Everything lives under one fixed-position root carrying the exclusion class,
so the inspector never inspects its own chrome. The view is redrawn from
[`tailor::overlay::OverlayFrame`] after every event; the tool buttons and
panel are rebuilt only when they change, so inputs keep focus while typing.
*/

use tailor::overlay::{Guides, HorizontalAnchor, OverlayFrame, ToolButton};
use tailor::panels::{Panel, TEXT_EDIT_HINT};
use tailor::platform::Host;
use tailor::{Inspector, Rect, Tool};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::platform::{EventHandler, WebPlatform};
use crate::style::px;
use crate::ui::{Field, UiAction, ACTION_ATTRIBUTE, FIELD_ATTRIBUTE};

const ROOT_STYLE: &str = "position:fixed;inset:0;pointer-events:none;z-index:2147483647;font:13px system-ui,sans-serif;";
const TOGGLE_STYLE: &str = "position:fixed;right:16px;bottom:16px;width:40px;height:40px;border-radius:20px;border:none;pointer-events:auto;cursor:pointer;background:#1f2937;color:#fff;";
const TOGGLE_ACTIVE_BACKGROUND: &str = "#2563eb";
const TOOLBAR_STYLE: &str = "position:fixed;display:none;flex-direction:column;gap:6px;box-sizing:border-box;padding:8px;border-radius:8px;background:#111827;color:#f9fafb;overflow:auto;";
const BUTTON_STYLE: &str = "margin-right:4px;padding:4px 6px;border:none;border-radius:4px;background:#374151;color:inherit;cursor:pointer;";
const ACTIVE_BUTTON_BACKGROUND: &str = "#2563eb";
const GUIDE_COLORS: [&str; 3] = ["#f59e0b", "#3b82f6", "#10b981"];

/// The mounted overlay chrome.
#[derive(Debug)]
pub struct View {
  document: Document,
  root: HtmlElement,
  toggle: HtmlElement,
  guides: [HtmlElement; 3],
  toolbar: HtmlElement,
  header: HtmlElement,
  buttons: HtmlElement,
  panel: HtmlElement,
  shown_tools: Vec<ToolButton>,
  shown_panel: Option<Tool>,
}

impl View {
  /// Build the chrome and append it to `<body>`.
  pub fn mount(
    document: &Document,
    exclusion_class: &str,
    on_click: &EventHandler,
    on_input: &EventHandler,
  ) -> Result<Self, JsValue> {
    let root = create(document, "div", ROOT_STYLE)?;
    root.class_list().add_1(exclusion_class)?;
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    root.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

    let mut guides = Vec::with_capacity(GUIDE_COLORS.len());
    for color in GUIDE_COLORS {
      let guide = create(
        document,
        "div",
        &format!("position:fixed;display:none;box-sizing:border-box;outline:1px dashed {color};"),
      )?;
      root.append_child(&guide)?;
      guides.push(guide);
    }
    let guides: [HtmlElement; 3] = guides
      .try_into()
      .map_err(|_| JsValue::from_str("guide count mismatch"))?;

    let toolbar = create(document, "div", TOOLBAR_STYLE)?;
    let header = create(document, "strong", "")?;
    let buttons = create(document, "div", "")?;
    let panel = create(document, "div", "display:flex;flex-direction:column;gap:6px;")?;
    toolbar.append_child(&header)?;
    toolbar.append_child(&buttons)?;
    toolbar.append_child(&panel)?;
    root.append_child(&toolbar)?;

    let toggle = create(document, "button", TOGGLE_STYLE)?;
    toggle.set_attribute(ACTION_ATTRIBUTE, &UiAction::Toggle.to_attribute())?;
    toggle.set_attribute("title", "Inspect")?;
    toggle.set_text_content(Some("\u{1F50D}"));
    root.append_child(&toggle)?;

    document
      .body()
      .ok_or_else(|| JsValue::from_str("document has no body"))?
      .append_child(&root)?;

    Ok(Self {
      document: document.clone(),
      root,
      toggle,
      guides,
      toolbar,
      header,
      buttons,
      panel,
      shown_tools: Vec::new(),
      shown_panel: None,
    })
  }

  /// Remove the chrome from the page.
  pub fn unmount(&self) {
    self.root.remove();
  }

  /// Redraw from the inspector's current state.
  pub fn render<H: Host>(&mut self, inspector: &Inspector<WebPlatform, H>) -> Result<(), JsValue> {
    let style = self.toggle.style();
    let background = if inspector.mode().is_active() {
      TOGGLE_ACTIVE_BACKGROUND
    } else {
      "#1f2937"
    };
    style.set_property("background", background)?;
    self
      .toggle
      .set_attribute("aria-pressed", &inspector.mode().is_active().to_string())?;

    let Some(frame) = inspector.frame() else {
      self.hide()?;
      return Ok(());
    };

    self.render_guides(frame.guides)?;
    self.render_toolbar(&frame)?;

    if frame.tools != self.shown_tools {
      self.render_buttons(&frame.tools)?;
      self.shown_tools = frame.tools.clone();
    }

    if frame.panel != self.shown_panel {
      self.panel.set_text_content(None);
      if let (Some(_), Some(panel)) = (frame.panel, inspector.panel()) {
        self.render_panel(panel)?;
      }
      self.shown_panel = frame.panel;
    }

    if let Some(submit) = self
      .panel
      .query_selector(&format!("[{ACTION_ATTRIBUTE}=\"{}\"]", UiAction::Submit.to_attribute()))?
    {
      submit.toggle_attribute_with_force("disabled", !inspector.can_submit())?;
    }
    Ok(())
  }

  fn hide(&mut self) -> Result<(), JsValue> {
    for guide in &self.guides {
      guide.style().set_property("display", "none")?;
    }
    self.toolbar.style().set_property("display", "none")?;
    self.panel.set_text_content(None);
    self.shown_panel = None;
    Ok(())
  }

  fn render_guides(&self, guides: Option<Guides>) -> Result<(), JsValue> {
    let rects = guides.map(|g| [g.margin, g.border, g.content]);
    for (i, guide) in self.guides.iter().enumerate() {
      match rects.as_ref().and_then(|rects| rects.get(i)) {
        Some(rect) => place(guide, *rect)?,
        None => guide.style().set_property("display", "none")?,
      }
    }
    Ok(())
  }

  fn render_toolbar(&self, frame: &OverlayFrame) -> Result<(), JsValue> {
    let placement = frame.toolbar;
    let style = self.toolbar.style();
    style.set_property("display", "flex")?;
    style.set_property("top", &px(placement.top))?;
    style.set_property("width", &px(placement.size.width))?;
    style.set_property("height", &px(placement.size.height))?;
    style.set_property("pointer-events", placement.pointer_events.as_css())?;
    match placement.horizontal {
      HorizontalAnchor::Left(left) => {
        style.set_property("left", &px(left))?;
        style.remove_property("right")?;
      }
      HorizontalAnchor::Right(right) => {
        style.set_property("right", &px(right))?;
        style.remove_property("left")?;
      }
    }
    self.header.set_text_content(Some(&frame.tag_name));
    Ok(())
  }

  fn render_buttons(&self, tools: &[ToolButton]) -> Result<(), JsValue> {
    self.buttons.set_text_content(None);
    for button in tools {
      let el = create(&self.document, "button", BUTTON_STYLE)?;
      el.set_attribute(ACTION_ATTRIBUTE, &UiAction::Tool(button.tool).to_attribute())?;
      el.set_attribute("title", button.label)?;
      el.set_text_content(Some(button.icon.glyph()));
      if button.active {
        el.style().set_property("background", ACTIVE_BUTTON_BACKGROUND)?;
      }
      self.buttons.append_child(&el)?;
    }
    Ok(())
  }

  fn render_panel(&self, panel: &Panel) -> Result<(), JsValue> {
    match panel {
      Panel::Magic(magic) => {
        let input = self.field("textarea", Field::Instruction, magic.instruction())?;
        input.set_attribute("placeholder", "Describe the change")?;
        self.action_row(&[(UiAction::Submit, "Apply"), (UiAction::Cancel, "Cancel")])?;
      }
      Panel::ClassEdit(class_edit) => {
        let list = create(&self.document, "div", "display:flex;flex-wrap:wrap;gap:4px;")?;
        for class in class_edit.classes() {
          let chip = create(&self.document, "code", "")?;
          chip.set_text_content(Some(class));
          list.append_child(&chip)?;
        }
        self.panel.append_child(&list)?;
        let input = self.field("input", Field::Class, class_edit.new_class())?;
        input.set_attribute("placeholder", "new-class")?;
        self.action_row(&[(UiAction::Submit, "Add class"), (UiAction::Cancel, "Cancel")])?;
      }
      Panel::EditText(_) => {
        let hint = create(&self.document, "span", "")?;
        hint.set_text_content(Some(TEXT_EDIT_HINT));
        self.panel.append_child(&hint)?;
        self.action_row(&[(UiAction::Submit, "Save"), (UiAction::Cancel, "Cancel")])?;
      }
      Panel::Locate(locate) => {
        let label = create(&self.document, "span", "")?;
        label.set_text_content(Some(&locate.label().unwrap_or_default()));
        self.panel.append_child(&label)?;
        self.action_row(&[(UiAction::Cancel, "Close")])?;
      }
      Panel::LinkUpdate(link) => {
        self.field("input", Field::Href, link.new_href())?;
        self.action_row(&[(UiAction::Submit, "Update link"), (UiAction::Cancel, "Cancel")])?;
      }
    }
    Ok(())
  }

  /// Append a text input bound to `field`.
  fn field(&self, tag: &str, field: Field, value: &str) -> Result<HtmlElement, JsValue> {
    let input = create(&self.document, tag, "box-sizing:border-box;width:100%;")?;
    input.set_attribute(FIELD_ATTRIBUTE, field.as_attribute())?;
    if let Some(input) = input.dyn_ref::<web_sys::HtmlInputElement>() {
      input.set_value(value);
    } else if let Some(textarea) = input.dyn_ref::<web_sys::HtmlTextAreaElement>() {
      textarea.set_value(value);
    }
    self.panel.append_child(&input)?;
    if let Err(e) = input.focus() {
      log::debug!("input focus failed: {e:?}");
    }
    Ok(input)
  }

  fn action_row(&self, actions: &[(UiAction, &str)]) -> Result<(), JsValue> {
    let row = create(&self.document, "div", "")?;
    for (action, label) in actions {
      let button = create(&self.document, "button", BUTTON_STYLE)?;
      button.set_attribute(ACTION_ATTRIBUTE, &action.to_attribute())?;
      button.set_text_content(Some(label));
      row.append_child(&button)?;
    }
    self.panel.append_child(&row)?;
    Ok(())
  }
}

fn create(document: &Document, tag: &str, style: &str) -> Result<HtmlElement, JsValue> {
  let element = document.create_element(tag)?;
  if !style.is_empty() {
    element.set_attribute("style", style)?;
  }
  element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn place(element: &HtmlElement, rect: Rect) -> Result<(), JsValue> {
  let style = element.style();
  style.set_property("display", "block")?;
  style.set_property("top", &px(rect.top))?;
  style.set_property("left", &px(rect.left))?;
  style.set_property("width", &px(rect.width))?;
  style.set_property("height", &px(rect.height))?;
  Ok(())
}

/// The control the event came from, if it is one of ours.
pub fn action_of(target: &Element) -> Option<UiAction> {
  let control: Element = target.closest(&format!("[{ACTION_ATTRIBUTE}]")).ok().flatten()?;
  UiAction::parse(&control.get_attribute(ACTION_ATTRIBUTE)?)
}

/// The panel field an input event came from, with its current value.
pub fn field_of(target: &Element) -> Option<(Field, String)> {
  let field = Field::parse(&target.get_attribute(FIELD_ATTRIBUTE)?)?;
  let value = if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
    input.value()
  } else {
    target.dyn_ref::<web_sys::HtmlTextAreaElement>()?.value()
  };
  Some((field, value))
}
