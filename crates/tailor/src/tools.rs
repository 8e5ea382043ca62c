/*!
Tool registry.

A fixed, ordered list of tool descriptors. Each tool's applicability is a
pure function of the element and its resolved location.
*/

use crate::platform::{DomNode, NodeKind};
use crate::types::{Location, Tool};

/// Icon shown on a tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
  /// Magic.
  WandSparkles,
  /// Class edit.
  AlignJustify,
  /// Text edit.
  Pencil,
  /// Locate.
  Eye,
  /// Link update.
  Link,
}

impl Icon {
  /// Text glyph for renderers without an icon font.
  pub const fn glyph(self) -> &'static str {
    match self {
      Icon::WandSparkles => "\u{2728}",
      Icon::AlignJustify => "\u{2261}",
      Icon::Pencil => "\u{270E}",
      Icon::Eye => "\u{1F441}",
      Icon::Link => "\u{1F517}",
    }
  }
}

/// Static description of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
  /// The tool this entry describes.
  pub tool: Tool,
  /// Toolbar button icon.
  pub icon: Icon,
  /// Whether box-model guides stay visible while this tool is active.
  pub shows_guides: bool,
}

impl ToolDescriptor {
  /// Display name, shown as the button tooltip.
  pub const fn name(&self) -> &'static str {
    self.tool.label()
  }

  /// Whether this tool applies to `element` at `location`.
  pub fn should_show<N: DomNode>(&self, element: &N, location: Option<&Location>) -> bool {
    should_show(self.tool, element, location)
  }
}

/// Every tool, in display order.
pub const TOOLS: [ToolDescriptor; 5] = [
  ToolDescriptor {
    tool: Tool::Magic,
    icon: Icon::WandSparkles,
    shows_guides: true,
  },
  ToolDescriptor {
    tool: Tool::ClassEdit,
    icon: Icon::AlignJustify,
    shows_guides: true,
  },
  ToolDescriptor {
    tool: Tool::EditText,
    icon: Icon::Pencil,
    shows_guides: false,
  },
  ToolDescriptor {
    tool: Tool::Locate,
    icon: Icon::Eye,
    shows_guides: false,
  },
  ToolDescriptor {
    tool: Tool::LinkUpdate,
    icon: Icon::Link,
    shows_guides: false,
  },
];

/// Look up a tool's descriptor.
pub fn descriptor(tool: Tool) -> &'static ToolDescriptor {
  match tool {
    Tool::Magic => &TOOLS[0],
    Tool::ClassEdit => &TOOLS[1],
    Tool::EditText => &TOOLS[2],
    Tool::Locate => &TOOLS[3],
    Tool::LinkUpdate => &TOOLS[4],
  }
}

/// Descriptors applicable to `element`, in display order.
pub fn applicable_tools<N: DomNode>(element: &N, location: Option<&Location>) -> Vec<&'static ToolDescriptor> {
  TOOLS
    .iter()
    .filter(|descriptor| descriptor.should_show(element, location))
    .collect()
}

fn should_show<N: DomNode>(tool: Tool, element: &N, location: Option<&Location>) -> bool {
  let exact = location.is_some_and(Location::is_exact);
  match tool {
    Tool::Magic => true,
    Tool::ClassEdit | Tool::Locate => exact,
    Tool::EditText => is_plain_text_element(element),
    // Link edits are always emitted as precise, so they need an exact anchor.
    Tool::LinkUpdate => exact && element.tag_name() == "a",
  }
}

/// Single text child, and a tag whose text is safe to edit in place.
fn is_plain_text_element<N: DomNode>(element: &N) -> bool {
  let only_text = element.child_kinds() == [NodeKind::Text];
  if !only_text {
    return false;
  }

  let tag = element.tag_name();
  matches!(tag.as_str(), "p" | "div" | "span") || tag.starts_with('h') || tag.starts_with('a')
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::memory::{MemoryDom, MemoryNode};
  use crate::types::SourceAnchor;

  fn exact() -> Location {
    Location::Exact(SourceAnchor::new("pages/index.astro", 12))
  }

  fn parent() -> Location {
    Location::Parent(SourceAnchor::new("layout.astro", 4))
  }

  fn names(element: &MemoryNode, location: Option<&Location>) -> Vec<Tool> {
    applicable_tools(element, location)
      .into_iter()
      .map(|d| d.tool)
      .collect()
  }

  #[test]
  fn registry_order_and_guides() {
    let tools: Vec<Tool> = TOOLS.iter().map(|d| d.tool).collect();
    assert_eq!(
      tools,
      vec![Tool::Magic, Tool::ClassEdit, Tool::EditText, Tool::Locate, Tool::LinkUpdate]
    );
    for d in &TOOLS {
      assert_eq!(descriptor(d.tool), d, "descriptor lookup for {}", d.name());
    }
    assert!(descriptor(Tool::Magic).shows_guides);
    assert!(descriptor(Tool::ClassEdit).shows_guides);
    assert!(!descriptor(Tool::EditText).shows_guides);
    assert!(!descriptor(Tool::Locate).shows_guides);
    assert!(!descriptor(Tool::LinkUpdate).shows_guides);
  }

  #[test]
  fn magic_always_applies() {
    let dom = MemoryDom::new();
    let img = dom.body().append_element("img");
    assert_eq!(names(&img, None), vec![Tool::Magic]);
  }

  #[test]
  fn exact_location_unlocks_class_and_locate() {
    let dom = MemoryDom::new();
    let section = dom.body().append_element("section");
    section.append_element("div");
    assert_eq!(
      names(&section, Some(&exact())),
      vec![Tool::Magic, Tool::ClassEdit, Tool::Locate]
    );
    assert_eq!(names(&section, Some(&parent())), vec![Tool::Magic]);
  }

  #[test]
  fn edit_text_needs_single_text_child() {
    let dom = MemoryDom::new();
    let p = dom.body().append_element("p");
    p.append_text("Hello");
    assert!(names(&p, None).contains(&Tool::EditText));

    let mixed = dom.body().append_element("p");
    mixed.append_text("Hello ");
    mixed.append_element("b").append_text("world");
    assert!(!names(&mixed, None).contains(&Tool::EditText));

    let empty = dom.body().append_element("p");
    assert!(!names(&empty, None).contains(&Tool::EditText));

    let commented = dom.body().append_element("p");
    commented.append_comment();
    assert!(!names(&commented, None).contains(&Tool::EditText));
  }

  #[test]
  fn edit_text_tag_rules() {
    let dom = MemoryDom::new();
    for tag in ["p", "div", "span", "h1", "h6", "header", "a", "abbr"] {
      let el = dom.body().append_element(tag);
      el.append_text("x");
      assert!(names(&el, None).contains(&Tool::EditText), "{tag} should allow text edit");
    }
    for tag in ["li", "button", "td", "em"] {
      let el = dom.body().append_element(tag);
      el.append_text("x");
      assert!(!names(&el, None).contains(&Tool::EditText), "{tag} should not allow text edit");
    }
  }

  #[test]
  fn link_requires_anchor_tag_and_exact_location() {
    let dom = MemoryDom::new();
    let a = dom.body().append_element("a");
    a.set_attribute("href", "/old");
    a.append_text("Link");

    assert!(names(&a, Some(&exact())).contains(&Tool::LinkUpdate));
    assert!(!names(&a, Some(&parent())).contains(&Tool::LinkUpdate));
    assert!(!names(&a, None).contains(&Tool::LinkUpdate));

    let div = dom.body().append_element("div");
    assert!(!names(&div, Some(&exact())).contains(&Tool::LinkUpdate));
  }

  #[test]
  fn icons_have_glyphs() {
    for d in &TOOLS {
      assert!(!d.icon.glyph().is_empty());
    }
  }
}
