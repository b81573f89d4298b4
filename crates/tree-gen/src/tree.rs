//! Arena-backed storage for generated trees

use std::collections::BTreeMap;
use std::ops::Range;

use crate::config::GeneratorConfig;
use crate::node::{Node, NodeId};

/// A complete tree produced by [`TreeGenerator`](crate::TreeGenerator)
///
/// Every node lives in a single arena, in breadth-first order, so each level
/// is a contiguous slice: parent-major, child-index-minor. A node's id is its
/// arena index, which makes parent and children lookups O(1).
#[derive(Debug, Clone)]
pub struct Tree<C> {
    config: GeneratorConfig,
    nodes: Vec<Node<C>>,
    levels: Vec<Range<usize>>,
}

impl<C> Tree<C> {
    /// Assemble a tree from breadth-first nodes and the arena range of each level
    pub(crate) fn from_parts(
        config: GeneratorConfig,
        nodes: Vec<Node<C>>,
        levels: Vec<Range<usize>>,
    ) -> Self {
        debug_assert_eq!(levels.len(), config.level_count());
        debug_assert_eq!(levels.last().map(|r| r.end), Some(nodes.len()));
        Self {
            config,
            nodes,
            levels,
        }
    }

    /// The configuration this tree was generated with
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Number of children of every non-leaf node
    pub fn growth_rate(&self) -> usize {
        self.config.growth_rate
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node
    pub fn root(&self) -> &Node<C> {
        &self.nodes[NodeId::ROOT.get()]
    }

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is not part of this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.get())
    }

    /// Number of levels, root level included (`depth + 1`)
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Nodes on `level`, in generation order
    ///
    /// Returns `None` for levels deeper than the tree.
    pub fn level(&self, level: usize) -> Option<&[Node<C>]> {
        self.levels
            .get(level)
            .map(|range| &self.nodes[range.clone()])
    }

    /// Iterate over `(level, nodes)` pairs, root level first
    pub fn levels(&self) -> impl ExactSizeIterator<Item = (usize, &[Node<C>])> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(move |(level, range)| (level, &self.nodes[range.clone()]))
    }

    /// Nodes on the deepest level
    pub fn leaves(&self) -> &[Node<C>] {
        self.levels
            .last()
            .map_or(&[][..], |range| &self.nodes[range.clone()])
    }

    /// Iterate over every node, breadth-first
    pub fn iter(&self) -> std::slice::Iter<'_, Node<C>> {
        self.nodes.iter()
    }

    /// Get the parent of a node
    ///
    /// Returns `None` for the root.
    pub fn parent(&self, node: &Node<C>) -> Option<&Node<C>> {
        node.parent().and_then(|id| self.get(id))
    }

    /// Children of a node, ordered by child index
    ///
    /// Children of one parent are adjacent in the next level, at the parent's
    /// position times the growth rate. Leaves get an empty slice, and so
    /// does a node whose id does not sit on its level in this tree.
    pub fn children(&self, node: &Node<C>) -> &[Node<C>] {
        let (Some(own), Some(next)) = (
            self.levels.get(node.level()),
            self.levels.get(node.level().saturating_add(1)),
        ) else {
            return &[];
        };
        if !own.contains(&node.id().get()) {
            return &[];
        }

        let growth_rate = self.config.growth_rate;
        let start = next.start + (node.id().get() - own.start) * growth_rate;
        self.nodes.get(start..start + growth_rate).unwrap_or(&[])
    }

    /// Path from the root down to `node`, both included
    ///
    /// Follows parent links exactly `node.level()` times, so the result always
    /// holds `node.level() + 1` nodes.
    ///
    /// `node` must come from this tree. For a node whose level does not match
    /// its parent chain the result is unspecified; debug builds panic instead.
    pub fn path_to_root<'a>(&'a self, node: &'a Node<C>) -> Vec<&'a Node<C>> {
        let mut path = Vec::with_capacity(node.level() + 1);
        path.push(node);

        let mut current = node;
        for _ in 0..node.level() {
            let Some(parent) = self.parent(current) else {
                break;
            };
            debug_assert_eq!(
                parent.level() + 1,
                current.level(),
                "{} is not one level above {}",
                parent.id(),
                current.id()
            );
            path.push(parent);
            current = parent;
        }
        debug_assert!(
            current.is_root() && path.len() == node.level() + 1,
            "parent chain of {} does not match its level {}",
            node.id(),
            node.level()
        );

        path.reverse();
        path
    }

    /// Path from the root down to the node with the given ID
    ///
    /// Returns `None` if the ID is not part of this tree.
    pub fn path_to_root_by_id(&self, id: NodeId) -> Option<Vec<&Node<C>>> {
        self.get(id).map(|node| self.path_to_root(node))
    }

    /// Consume the tree into a map from level to the nodes on that level
    ///
    /// Every level from `0` to `depth` has an entry, empty levels included.
    pub fn into_levels(self) -> BTreeMap<usize, Vec<Node<C>>> {
        let mut nodes = self.nodes.into_iter();
        self.levels
            .iter()
            .enumerate()
            .map(|(level, range)| (level, nodes.by_ref().take(range.len()).collect()))
            .collect()
    }
}

impl<'a, C> IntoIterator for &'a Tree<C> {
    type Item = &'a Node<C>;
    type IntoIter = std::slice::Iter<'a, Node<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
