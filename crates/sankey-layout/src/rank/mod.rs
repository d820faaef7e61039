//! Cycle-breaking preparation for rank assignment.
//!
//! A depth-first spanning tree annotated with depths, a preorder thread and subtree ranges
//! answers ancestor/descendant queries without walking parent chains; non-tree edges that
//! point back at an ancestor are the feedback edges a leveling pass must treat as reversed.

mod tree;
pub use tree::{NodeRelationship, SpanningTree, TreeNode};

mod spanning_tree;
pub use spanning_tree::{find_spanning_tree, node_relationship};

mod acyclic;
pub use acyclic::{default_root, feedback_edges, make_acyclic};
