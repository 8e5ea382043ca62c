/*!
In-memory document and platform.

A small DOM with just enough behavior for the inspector: elements, text
nodes, attributes, classes, editability, geometry, and one-shot click
suppressors. `MemoryPlatform` records listener changes so tests can assert
the listener invariants.

```
use tailor::platform::memory::MemoryDom;
use tailor::platform::DomNode;

let dom = MemoryDom::new();
let p = dom.body().append_element("p");
p.append_text("Hello");
assert_eq!(p.text_content().as_deref(), Some("Hello"));
```
*/

mod tree;

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use super::{DomNode, Listener, NodeKind, Platform};
use crate::types::{BoxModel, NodeId, Rect, Size, TailorError, TailorResult};
use tree::NodeTree;

#[derive(Debug, Default)]
struct ElementData {
  tag: String,
  attributes: BTreeMap<String, String>,
  classes: Vec<String>,
  editable: bool,
  box_model: BoxModel,
  click_suppressed: bool,
}

#[derive(Debug)]
enum NodeData {
  Element(ElementData),
  Text(String),
  Comment,
}

#[derive(Debug)]
struct Document {
  nodes: HashMap<NodeId, NodeData>,
  tree: NodeTree,
  focused: Option<NodeId>,
  next_id: NodeId,
}

impl Document {
  fn element(&self, id: NodeId) -> Option<&ElementData> {
    match self.nodes.get(&id) {
      Some(NodeData::Element(data)) => Some(data),
      _ => None,
    }
  }

  fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
    match self.nodes.get_mut(&id) {
      Some(NodeData::Element(data)) => Some(data),
      _ => None,
    }
  }

  fn insert(&mut self, parent: NodeId, data: NodeData) -> NodeId {
    let id = self.next_id;
    self.next_id = id.next();
    self.nodes.insert(id, data);
    self.tree.append_child(parent, id);
    id
  }

  fn text_of(&self, id: NodeId) -> String {
    self
      .tree
      .descendants(id)
      .into_iter()
      .filter_map(|child| match self.nodes.get(&child) {
        Some(NodeData::Text(text)) => Some(text.as_str()),
        _ => None,
      })
      .collect()
  }
}

/// An in-memory document. Clone is cheap and shares the document.
#[derive(Debug, Clone)]
pub struct MemoryDom {
  doc: Arc<RwLock<Document>>,
  body: NodeId,
}

impl Default for MemoryDom {
  fn default() -> Self {
    Self::new()
  }
}

impl MemoryDom {
  /// Create a document containing only `<body>`.
  pub fn new() -> Self {
    let body = NodeId::ROOT;
    let mut nodes = HashMap::new();
    nodes.insert(
      body,
      NodeData::Element(ElementData {
        tag: "body".to_string(),
        ..ElementData::default()
      }),
    );
    Self {
      doc: Arc::new(RwLock::new(Document {
        nodes,
        tree: NodeTree::new(),
        focused: None,
        next_id: body.next(),
      })),
      body,
    }
  }

  /// The document root.
  pub fn body(&self) -> MemoryNode {
    self.node(self.body)
  }

  fn node(&self, id: NodeId) -> MemoryNode {
    MemoryNode {
      id,
      doc: Arc::clone(&self.doc),
    }
  }
}

/// Handle to an element of a [`MemoryDom`].
#[derive(Clone)]
pub struct MemoryNode {
  id: NodeId,
  doc: Arc<RwLock<Document>>,
}

impl PartialEq for MemoryNode {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id && Arc::ptr_eq(&self.doc, &other.doc)
  }
}

impl std::fmt::Debug for MemoryNode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MemoryNode")
      .field("id", &self.id)
      .field("tag", &self.tag_name())
      .finish()
  }
}

impl MemoryNode {
  /// Identity within the document.
  pub const fn id(&self) -> NodeId {
    self.id
  }

  fn with(&self, id: NodeId) -> Self {
    Self {
      id,
      doc: Arc::clone(&self.doc),
    }
  }

  fn update(&self, f: impl FnOnce(&mut ElementData)) {
    if let Some(data) = self.doc.write().element_mut(self.id) {
      f(data);
    }
  }

  /// Append a new child element and return it.
  pub fn append_element(&self, tag: &str) -> MemoryNode {
    let id = self.doc.write().insert(
      self.id,
      NodeData::Element(ElementData {
        tag: tag.to_ascii_lowercase(),
        ..ElementData::default()
      }),
    );
    self.with(id)
  }

  /// Append a text node.
  pub fn append_text(&self, text: &str) {
    self
      .doc
      .write()
      .insert(self.id, NodeData::Text(text.to_string()));
  }

  /// Append a comment node.
  pub fn append_comment(&self) {
    self.doc.write().insert(self.id, NodeData::Comment);
  }

  /// Set or replace an attribute.
  pub fn set_attribute(&self, name: &str, value: &str) {
    self.update(|data| {
      data.attributes.insert(name.to_string(), value.to_string());
    });
  }

  /// Add a class unless present.
  pub fn add_class(&self, class: &str) {
    self.update(|data| {
      if !data.classes.iter().any(|c| c == class) {
        data.classes.push(class.to_string());
      }
    });
  }

  /// Set the geometry reported by `box_model` and `bounding_rect`.
  pub fn set_box_model(&self, box_model: BoxModel) {
    self.update(|data| data.box_model = box_model);
  }

  /// True while a one-shot click suppressor is pending on this element.
  pub fn has_click_suppressor(&self) -> bool {
    self
      .doc
      .read()
      .element(self.id)
      .is_some_and(|data| data.click_suppressed)
  }

  /// Simulate the user clicking this element. Returns true if the click
  /// reached page handlers (was not suppressed).
  pub fn click(&self) -> bool {
    let mut doc = self.doc.write();
    let Some(data) = doc.element_mut(self.id) else {
      return false;
    };
    let suppressed = data.click_suppressed;
    data.click_suppressed = false;
    !suppressed
  }

  /// True if this node was the last one focused.
  pub fn is_focused(&self) -> bool {
    self.doc.read().focused == Some(self.id)
  }
}

impl DomNode for MemoryNode {
  fn tag_name(&self) -> String {
    self
      .doc
      .read()
      .element(self.id)
      .map(|data| data.tag.clone())
      .unwrap_or_default()
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self
      .doc
      .read()
      .element(self.id)
      .and_then(|data| data.attributes.get(name).cloned())
  }

  fn parent(&self) -> Option<Self> {
    let parent = self.doc.read().tree.parent(self.id)?;
    Some(self.with(parent))
  }

  fn has_class(&self, class: &str) -> bool {
    self
      .doc
      .read()
      .element(self.id)
      .is_some_and(|data| data.classes.iter().any(|c| c == class))
  }

  fn class_list(&self) -> Vec<String> {
    self
      .doc
      .read()
      .element(self.id)
      .map(|data| data.classes.clone())
      .unwrap_or_default()
  }

  fn child_kinds(&self) -> Vec<NodeKind> {
    let doc = self.doc.read();
    doc
      .tree
      .children(self.id)
      .iter()
      .map(|child| match doc.nodes.get(child) {
        Some(NodeData::Element(_)) => NodeKind::Element,
        Some(NodeData::Text(_)) => NodeKind::Text,
        Some(NodeData::Comment) | None => NodeKind::Other,
      })
      .collect()
  }

  fn text_content(&self) -> Option<String> {
    Some(self.doc.read().text_of(self.id))
  }

  fn set_text_content(&self, text: &str) {
    let mut doc = self.doc.write();
    let children = doc.tree.children(self.id).to_vec();
    for child in children {
      for removed in doc.tree.remove_subtree(child) {
        doc.nodes.remove(&removed);
      }
    }
    if !text.is_empty() {
      doc.insert(self.id, NodeData::Text(text.to_string()));
    }
  }

  fn href(&self) -> Option<String> {
    if self.tag_name() != "a" {
      return None;
    }
    self.attribute("href")
  }

  fn descendants(&self) -> Vec<Self> {
    let doc = self.doc.read();
    doc
      .tree
      .descendants(self.id)
      .into_iter()
      .filter(|id| doc.element(*id).is_some())
      .map(|id| self.with(id))
      .collect()
  }

  fn set_editable(&self, editable: bool) {
    self.update(|data| data.editable = editable);
  }

  fn is_editable(&self) -> bool {
    self
      .doc
      .read()
      .element(self.id)
      .is_some_and(|data| data.editable)
  }

  fn focus(&self) {
    self.doc.write().focused = Some(self.id);
  }

  fn box_model(&self) -> BoxModel {
    self
      .doc
      .read()
      .element(self.id)
      .map(|data| data.box_model)
      .unwrap_or_default()
  }

  fn bounding_rect(&self) -> Rect {
    self.box_model().border_box
  }

  fn suppress_next_click(&self) {
    self.update(|data| data.click_suppressed = true);
  }

  fn release_click_suppression(&self) {
    self.update(|data| data.click_suppressed = false);
  }
}

/// A listener attach/detach, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
  Attached(Listener),
  Detached(Listener),
}

/// Platform that records listener changes instead of touching a page.
#[derive(Debug)]
pub struct MemoryPlatform {
  viewport: Size,
  attached: HashSet<Listener>,
  history: Vec<ListenerChange>,
  click_overlap: bool,
  failing: Option<Listener>,
}

impl Default for MemoryPlatform {
  fn default() -> Self {
    Self::new(Size::new(1920.0, 1080.0))
  }
}

impl MemoryPlatform {
  /// A platform with nothing attached.
  pub fn new(viewport: Size) -> Self {
    Self {
      viewport,
      attached: HashSet::new(),
      history: Vec::new(),
      click_overlap: false,
      failing: None,
    }
  }

  /// Resize the viewport.
  pub fn set_viewport(&mut self, viewport: Size) {
    self.viewport = viewport;
  }

  /// Make every future `attach` of `listener` fail.
  pub fn fail_attach(&mut self, listener: Listener) {
    self.failing = Some(listener);
  }

  /// True if `listener` is attached now.
  pub fn is_attached(&self, listener: Listener) -> bool {
    self.attached.contains(&listener)
  }

  /// Number of listeners currently attached.
  pub fn attached_count(&self) -> usize {
    self.attached.len()
  }

  /// Every attach and detach, oldest first.
  pub fn history(&self) -> &[ListenerChange] {
    &self.history
  }

  /// True if both click listeners were ever attached at the same time.
  pub const fn click_overlap_detected(&self) -> bool {
    self.click_overlap
  }
}

impl Platform for MemoryPlatform {
  type Node = MemoryNode;

  fn attach(&mut self, listener: Listener) -> TailorResult<()> {
    if self.failing == Some(listener) {
      return Err(TailorError::ListenerAttach {
        listener,
        reason: "attach disabled".to_string(),
      });
    }
    if !self.attached.insert(listener) {
      log::error!("attach: {listener:?} already attached");
    }
    if self.attached.contains(&Listener::SelectClick) && self.attached.contains(&Listener::RetargetClick) {
      self.click_overlap = true;
    }
    self.history.push(ListenerChange::Attached(listener));
    Ok(())
  }

  fn detach(&mut self, listener: Listener) {
    if !self.attached.remove(&listener) {
      log::error!("detach: {listener:?} was not attached");
    }
    self.history.push(ListenerChange::Detached(listener));
  }

  fn viewport(&self) -> Size {
    self.viewport
  }
}
