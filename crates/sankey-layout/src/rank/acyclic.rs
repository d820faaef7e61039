//! Feedback edge selection.
//!
//! Every edge that is not part of the spanning tree and points from a node back to one of its
//! tree ancestors closes a cycle. Marking those edges (and self-loops) as reversed leaves an
//! acyclic graph for longest-path leveling.

use super::{NodeRelationship, SpanningTree, find_spanning_tree, node_relationship};
use crate::error::Result;
use crate::graphlib::{EdgeKey, Graph};
use crate::model::FlowEdge;
use tracing::debug;

/// First source node in insertion order, or the first node when every node has an in-edge.
pub fn default_root<N, E>(g: &Graph<N, E>) -> Option<&str>
where
    N: Default + 'static,
    E: Default + 'static,
{
    g.sources().first().copied().or_else(|| g.nodes().next())
}

/// Edges whose head is the tail itself or a tree ancestor of the tail, in edge insertion
/// order. Edges touching nodes outside the tree are never reported.
pub fn feedback_edges<N, E>(g: &Graph<N, E>, tree: &SpanningTree) -> Vec<EdgeKey>
where
    N: Default + 'static,
    E: Default + 'static,
{
    g.edges()
        .filter(|e| {
            if !tree.contains(&e.v) || !tree.contains(&e.w) {
                return false;
            }
            if e.is_self_loop() {
                return true;
            }
            !tree.contains_edge(e)
                && node_relationship(tree, &e.v, &e.w) == NodeRelationship::Ancestor
        })
        .cloned()
        .collect()
}

/// Builds the spanning tree from `root`, flags every feedback edge as reversed and returns
/// their keys. Edges already flagged stay flagged.
pub fn make_acyclic<N, E>(g: &mut Graph<N, E>, root: &str) -> Result<Vec<EdgeKey>>
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    let tree = find_spanning_tree(g, root)?;
    let feedback = feedback_edges(g, &tree);
    for key in &feedback {
        if let Some(label) = g.edge_mut_by_key(key) {
            label.set_reverse(true);
        }
    }

    debug!(
        root,
        tree_nodes = tree.len(),
        graph_nodes = g.node_count(),
        feedback = feedback.len(),
        "marked feedback edges"
    );
    Ok(feedback)
}
