//! Spanning tree arena.

use crate::graphlib::EdgeKey;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};

/// Record for one tree node. `thread` is the arena index of the next node in preorder; the
/// last node threads back to the root. The node's descendants occupy the arena indices
/// strictly between its own index and `subtree_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub depth: usize,
    pub thread: usize,
    pub parent: Option<usize>,
    pub subtree_end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRelationship {
    /// The second node lies in the first node's subtree.
    Descendant,
    /// The first node lies in the second node's subtree.
    Ancestor,
    Unrelated,
}

impl NodeRelationship {
    /// `+1` for descendant, `-1` for ancestor, `0` otherwise.
    pub fn sign(self) -> i8 {
        match self {
            Self::Descendant => 1,
            Self::Ancestor => -1,
            Self::Unrelated => 0,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Descendant => Self::Ancestor,
            Self::Ancestor => Self::Descendant,
            Self::Unrelated => Self::Unrelated,
        }
    }
}

/// Nodes are stored in discovery (preorder) order, so index 0 is the root.
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    nodes: Vec<TreeNode>,
    index: HashMap<String, usize>,
    edges: Vec<EdgeKey>,
    edge_set: HashSet<EdgeKey>,
}

impl SpanningTree {
    pub(crate) fn with_root(root: &str) -> Self {
        let mut tree = Self::default();
        tree.push_node(root, None);
        tree
    }

    /// Appends a node in preorder and re-closes the thread ring through the root.
    pub(crate) fn push_node(&mut self, id: &str, parent: Option<usize>) -> usize {
        let ix = self.nodes.len();
        let depth = parent.map_or(0, |p| self.nodes[p].depth + 1);
        if let Some(last) = self.nodes.last_mut() {
            last.thread = ix;
        }
        self.nodes.push(TreeNode {
            id: id.to_string(),
            depth,
            thread: 0,
            parent,
            subtree_end: ix + 1,
        });
        self.index.insert(id.to_string(), ix);
        ix
    }

    /// Records that every descendant of `ix` has been pushed.
    pub(crate) fn close_subtree(&mut self, ix: usize) {
        self.nodes[ix].subtree_end = self.nodes.len();
    }

    pub(crate) fn push_edge(&mut self, key: EdgeKey) {
        self.edge_set.insert(key.clone());
        self.edges.push(key);
    }

    pub(crate) fn ix(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, ix: usize) -> &TreeNode {
        &self.nodes[ix]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn root(&self) -> Option<&str> {
        self.nodes.first().map(|n| n.id.as_str())
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.ix(id).map(|ix| &self.nodes[ix])
    }

    pub fn depth(&self, id: &str) -> Option<usize> {
        self.node(id).map(|n| n.depth)
    }

    /// Next node id in the preorder thread.
    pub fn thread(&self, id: &str) -> Option<&str> {
        self.node(id).map(|n| self.nodes[n.thread].id.as_str())
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.node(id)
            .and_then(|n| n.parent)
            .map(|p| self.nodes[p].id.as_str())
    }

    /// Node ids in preorder.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Tree edges in discovery order.
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.edge_set.contains(key)
    }
}
