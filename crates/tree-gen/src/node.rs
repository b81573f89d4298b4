//! Core node types for generated trees

use derive_more::{Display, From, Into};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a node in its tree's arena
///
/// The generator numbers nodes in the order it creates them: the root first,
/// then each level left to right. Level `k` therefore holds a contiguous run
/// of ids, and a parent's children hold a contiguous run within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "NodeId({})", _0)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Id of the root, the first node ever generated
    pub const ROOT: NodeId = NodeId(0);

    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Arena index this id points at
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A single node in a generated tree
///
/// Nodes never change once created. The parent is stored as a [`NodeId`],
/// resolved through the owning [`Tree`](crate::Tree), so a node never owns
/// its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<C> {
    id: NodeId,
    contents: C,
    level: usize,
    parent: Option<NodeId>,
    child_index: usize,
}

impl<C> Node<C> {
    /// Create a node from its parts
    ///
    /// Nothing is checked. A node built this way is only meaningful to a
    /// [`Tree`](crate::Tree) whose arena agrees with `id`, `level` and `parent`.
    pub fn new(
        id: NodeId,
        contents: C,
        level: usize,
        parent: Option<NodeId>,
        child_index: usize,
    ) -> Self {
        Self {
            id,
            contents,
            level,
            parent,
            child_index,
        }
    }

    /// Create the root node of a tree
    pub(crate) fn root(contents: C) -> Self {
        Self {
            id: NodeId::ROOT,
            contents,
            level: 0,
            parent: None,
            child_index: 0,
        }
    }

    /// Create a child of `parent` at position `child_index` among its siblings
    pub(crate) fn child(id: NodeId, parent: &Node<C>, child_index: usize, contents: C) -> Self {
        Self {
            id,
            contents,
            level: parent.level + 1,
            parent: Some(parent.id),
            child_index,
        }
    }

    /// Get the node's id
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the contents attached to this node
    pub fn contents(&self) -> &C {
        &self.contents
    }

    /// Consume the node, returning its contents
    pub fn into_contents(self) -> C {
        self.contents
    }

    /// Distance from the root (root = 0)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Get the parent's id
    ///
    /// Returns `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position among siblings, in `0..growth_rate`
    ///
    /// The root has no siblings; it reports `0`, which means nothing. Use
    /// [`Node::is_root`] to tell it apart from a first child.
    pub fn child_index(&self) -> usize {
        self.child_index
    }

    /// Returns true if this is the root node
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
