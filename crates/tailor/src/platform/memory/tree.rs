/*!
Parent/child links of the in-memory document.

Every node has at most one parent, fixed at insertion. Children are kept
in document order. Both directions are updated together.
*/

use crate::types::NodeId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(super) struct NodeTree {
  parent_of: HashMap<NodeId, NodeId>,
  children_of: HashMap<NodeId, Vec<NodeId>>,
}

impl NodeTree {
  pub(super) fn new() -> Self {
    Self::default()
  }

  pub(super) fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.parent_of.get(&id).copied()
  }

  pub(super) fn children(&self, id: NodeId) -> &[NodeId] {
    self.children_of.get(&id).map_or(&[], Vec::as_slice)
  }

  /// Link `child` as the last child of `parent`. A node that already has a
  /// parent is left where it is.
  pub(super) fn append_child(&mut self, parent: NodeId, child: NodeId) {
    if let Some(&current) = self.parent_of.get(&child) {
      if current != parent {
        log::error!("Node {child} is already a child of {current}; not moving it under {parent}");
      }
      return;
    }
    self.parent_of.insert(child, parent);
    self.children_of.entry(parent).or_default().push(child);
  }

  /// Everything below `root` in document order, `root` excluded.
  pub(super) fn descendants(&self, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut pending: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
    while let Some(id) = pending.pop() {
      out.push(id);
      pending.extend(self.children(id).iter().rev().copied());
    }
    out
  }

  /// Unlink `root` from its parent and forget its whole subtree.
  /// Returns `root` followed by its descendants.
  pub(super) fn remove_subtree(&mut self, root: NodeId) -> Vec<NodeId> {
    if let Some(parent) = self.parent_of.remove(&root) {
      if let Some(siblings) = self.children_of.get_mut(&parent) {
        siblings.retain(|&sibling| sibling != root);
      }
    }
    let mut removed = vec![root];
    removed.extend(self.descendants(root));
    for id in &removed {
      self.children_of.remove(id);
      self.parent_of.remove(id);
    }
    removed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn id(n: u32) -> NodeId {
    NodeId(n)
  }

  /// 1 -> [2, 5], 2 -> [3, 4]
  fn sample() -> NodeTree {
    let mut tree = NodeTree::new();
    tree.append_child(id(1), id(2));
    tree.append_child(id(1), id(5));
    tree.append_child(id(2), id(3));
    tree.append_child(id(2), id(4));
    tree
  }

  #[test]
  fn children_keep_insertion_order() {
    let tree = sample();
    assert_eq!(tree.parent(id(5)), Some(id(1)));
    assert_eq!(tree.children(id(1)), &[id(2), id(5)]);
  }

  #[test]
  fn second_parent_is_refused() {
    let mut tree = sample();
    tree.append_child(id(1), id(2));
    tree.append_child(id(99), id(2));

    assert_eq!(tree.parent(id(2)), Some(id(1)));
    assert_eq!(tree.children(id(1)), &[id(2), id(5)], "re-append does not duplicate");
    assert!(tree.children(id(99)).is_empty());
  }

  #[test]
  fn descendants_in_document_order() {
    let tree = sample();
    assert_eq!(tree.descendants(id(1)), vec![id(2), id(3), id(4), id(5)]);
    assert!(tree.descendants(id(5)).is_empty());
  }

  #[test]
  fn removing_a_subtree_unlinks_it() {
    let mut tree = sample();

    assert_eq!(tree.remove_subtree(id(2)), vec![id(2), id(3), id(4)]);
    assert_eq!(tree.children(id(1)), &[id(5)]);
    assert_eq!(tree.parent(id(3)), None);
    assert!(tree.children(id(2)).is_empty());
  }
}
