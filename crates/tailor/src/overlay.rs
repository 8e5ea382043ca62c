/*!
Overlay layout.

Computes what the overlay should show for the current state: guide
rectangles around the tracked element, the toolbar position, and the tool
buttons. Geometry is reread from the page on every call, never cached, so
the guides follow reflow (e.g. while text is being edited).

Rendering the frame is left to the platform binding.
*/

use crate::platform::{DomNode, Host, Platform};
use crate::tools::{descriptor, Icon};
use crate::types::{BoxModel, Mode, Point, Rect, Size, Tool};
use crate::Inspector;

/// Outline rectangles drawn around the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guides {
  /// Margin box.
  pub margin: Rect,
  /// Border box.
  pub border: Rect,
  /// Content box.
  pub content: Rect,
}

impl From<BoxModel> for Guides {
  fn from(model: BoxModel) -> Self {
    Self {
      margin: model.margin_box,
      border: model.border_box,
      content: model.content_box,
    }
  }
}

/// Horizontal CSS anchor of the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalAnchor {
  /// Distance from the viewport's left edge.
  Left(f64),
  /// Distance from the viewport's right edge.
  Right(f64),
}

/// CSS `pointer-events` for the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
  /// Clicks pass through to the page.
  None,
  /// The toolbar takes clicks.
  Auto,
}

impl PointerEvents {
  /// Value for the `pointer-events` property.
  pub const fn as_css(self) -> &'static str {
    match self {
      PointerEvents::None => "none",
      PointerEvents::Auto => "auto",
    }
  }
}

/// Toolbar box placement in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarPlacement {
  /// Distance from the viewport top.
  pub top: f64,
  /// Horizontal edge and offset.
  pub horizontal: HorizontalAnchor,
  /// Toolbar box size.
  pub size: Size,
  /// Whether the toolbar takes clicks.
  pub pointer_events: PointerEvents,
}

/// Place the toolbar next to the pointer while inspecting.
///
/// Sits above the pointer when there is room, and to the left of it unless
/// that would leave the viewport.
pub fn place_near_pointer(pointer: Point, viewport: Size, toolbar: Size) -> ToolbarPlacement {
  let top = if pointer.y > toolbar.height {
    pointer.y - toolbar.height
  } else {
    pointer.y
  };
  let right = if pointer.x > viewport.width - toolbar.width {
    viewport.width - pointer.x
  } else {
    viewport.width - toolbar.width - pointer.x
  };

  ToolbarPlacement {
    top,
    horizontal: HorizontalAnchor::Right(right),
    size: toolbar,
    pointer_events: PointerEvents::None,
  }
}

/// Place the toolbar against the selected element's rect.
///
/// Right-aligned to the element when it fits, and above it unless there is
/// no room, in which case it flips below.
pub fn place_near_element(rect: Rect, toolbar: Size) -> ToolbarPlacement {
  let left = if rect.right() > toolbar.width {
    rect.right() - toolbar.width
  } else {
    rect.right()
  };
  let top = if rect.top > toolbar.height {
    rect.top - toolbar.height
  } else {
    rect.bottom()
  };

  ToolbarPlacement {
    top,
    horizontal: HorizontalAnchor::Left(left),
    size: toolbar,
    pointer_events: PointerEvents::Auto,
  }
}

/// One tool button in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolButton {
  /// Tool the button opens.
  pub tool: Tool,
  /// Tooltip text.
  pub label: &'static str,
  /// Button icon.
  pub icon: Icon,
  /// Highlighted as the active tool.
  pub active: bool,
}

/// Everything the overlay shows for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
  /// Lowercase tag name shown in the toolbar header.
  pub tag_name: String,
  /// Box-model guides, hidden for tools that draw none.
  pub guides: Option<Guides>,
  /// Where the toolbar goes.
  pub toolbar: ToolbarPlacement,
  /// Applicable tools in display order.
  pub tools: Vec<ToolButton>,
  /// Tool whose panel is shown. Only set while selected.
  pub panel: Option<Tool>,
}

impl<P: Platform, H: Host> Inspector<P, H> {
  /// Layout for the current state. None while idle or with nothing tracked.
  pub fn frame(&self) -> Option<OverlayFrame> {
    let element = self.tracked()?;
    let toolbar_size = self.config().toolbar_size();

    let toolbar = match self.mode() {
      Mode::Idle => return None,
      Mode::Inspecting => place_near_pointer(self.pointer(), self.platform().viewport(), toolbar_size),
      Mode::Selected { .. } => place_near_element(element.bounding_rect(), toolbar_size),
    };

    let active = self.active_tool();
    let show_guides = active.is_none_or(|tool| descriptor(tool).shows_guides);
    let selected = self.mode().is_selected();

    let tools = self
      .available_tools()
      .into_iter()
      .map(|d| ToolButton {
        tool: d.tool,
        label: d.name(),
        icon: d.icon,
        active: selected && active == Some(d.tool),
      })
      .collect();

    Some(OverlayFrame {
      tag_name: element.tag_name(),
      guides: show_guides.then(|| Guides::from(element.box_model())),
      toolbar,
      tools,
      panel: if selected { active } else { None },
    })
  }
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  proptest! {
    /// The toolbar never starts above the viewport while inspecting.
    #[test]
    fn pointer_placement_top_is_non_negative(x in 0.0..1920.0f64, y in 0.0..1080.0f64) {
      let placement = place_near_pointer(Point::new(x, y), Size::new(1920.0, 1080.0), Size::new(250.0, 250.0));
      prop_assert!(placement.top >= 0.0);
      let HorizontalAnchor::Right(right) = placement.horizontal else {
        return Err(TestCaseError::fail("inspecting anchors from the right"));
      };
      prop_assert!(right >= 0.0, "right offset {} off-screen", right);
    }

    /// Selected placement is either above the element or at its bottom edge.
    #[test]
    fn element_placement_hugs_rect(top in 0.0..1000.0f64, left in 0.0..1800.0f64, w in 1.0..500.0f64, h in 1.0..500.0f64) {
      let rect = Rect::new(top, left, w, h);
      let placement = place_near_element(rect, Size::new(250.0, 250.0));
      prop_assert!(placement.top == rect.top - 250.0 || placement.top == rect.bottom());
      prop_assert!(placement.top >= 0.0);
    }
  }
}
