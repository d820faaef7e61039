//! Depth-first spanning tree construction and relationship queries.

use super::tree::{NodeRelationship, SpanningTree};
use crate::error::{Error, Result};
use crate::graphlib::{EdgeKey, Graph};
use tracing::trace;

/// Builds a spanning tree of the nodes reachable from `root`.
///
/// Out-edges are followed in the graph's edge insertion order, never sorted by id, so the
/// tree (and the feedback edges derived from it) depend on how the graph was built. Nodes
/// unreachable from `root` are left out.
pub fn find_spanning_tree<N, E>(g: &Graph<N, E>, root: &str) -> Result<SpanningTree>
where
    N: Default + 'static,
    E: Default + 'static,
{
    if !g.has_node(root) {
        return Err(Error::InvalidRoot {
            root: root.to_string(),
        });
    }

    struct Frame {
        tree_ix: usize,
        out_edges: Vec<EdgeKey>,
        next: usize,
    }

    let mut tree = SpanningTree::with_root(root);
    let mut stack: Vec<Frame> = vec![Frame {
        tree_ix: 0,
        out_edges: g.out_edges(root, None),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(edge) = frame.out_edges.get(frame.next).cloned() else {
            let done = frame.tree_ix;
            stack.pop();
            tree.close_subtree(done);
            continue;
        };
        frame.next += 1;
        if tree.contains(&edge.w) {
            continue;
        }

        let parent = frame.tree_ix;
        let tree_ix = tree.push_node(&edge.w, Some(parent));
        trace!(
            node = %edge.w,
            parent = %edge.v,
            depth = tree.node_at(tree_ix).depth,
            "spanning tree discovered node"
        );
        let out_edges = g.out_edges(&edge.w, None);
        tree.push_edge(edge);
        stack.push(Frame {
            tree_ix,
            out_edges,
            next: 0,
        });
    }

    Ok(tree)
}

/// Classifies `v` relative to `u`: [`NodeRelationship::Descendant`] when `v` lies in `u`'s
/// subtree, [`NodeRelationship::Ancestor`] when `u` lies in `v`'s subtree.
///
/// A node is unrelated to itself, and ids missing from the tree are unrelated to everything.
/// Runs in constant time.
pub fn node_relationship(tree: &SpanningTree, u: &str, v: &str) -> NodeRelationship {
    let (Some(u_ix), Some(v_ix)) = (tree.ix(u), tree.ix(v)) else {
        return NodeRelationship::Unrelated;
    };

    if in_subtree(tree, u_ix, v_ix) {
        NodeRelationship::Descendant
    } else if in_subtree(tree, v_ix, u_ix) {
        NodeRelationship::Ancestor
    } else {
        NodeRelationship::Unrelated
    }
}

// Preorder stores a subtree as one contiguous run of the arena right after its top node.
fn in_subtree(tree: &SpanningTree, top: usize, target: usize) -> bool {
    top < target && target < tree.node_at(top).subtree_end
}
