/*! Node identity inside an in-memory document. */

use derive_more::{Display, From, Into};

/// Index of a node within one [`MemoryDom`](crate::platform::memory::MemoryDom).
///
/// Handed out in insertion order, never reused. Ids from different documents
/// are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("#{_0}")]
pub struct NodeId(pub u32);

impl NodeId {
  /// The `<body>` every document starts with.
  pub const ROOT: Self = Self(0);

  /// The id allocated after this one.
  pub const fn next(self) -> Self {
    Self(self.0 + 1)
  }
}
