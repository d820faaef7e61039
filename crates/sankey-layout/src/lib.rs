#![forbid(unsafe_code)]

//! Layered layout core for Sankey flow diagrams.
//!
//! The crate covers the two algorithmically dense parts of laying out a flow graph:
//!
//! - [`rank`]: a depth-first spanning tree with preorder threads, used to classify node
//!   relationships and pick the feedback edges that must be reversed before leveling.
//! - [`order`]: crossing minimisation within layers, driven by a weighted-median sweep and an
//!   accumulator-tree crossing counter.
//!
//! Building the graph, assigning ranks, inserting dummy nodes and drawing are left to the
//! caller.

pub use sankey_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod model;
pub mod order;
pub mod rank;

pub use error::{Error, Result};
pub use model::{FlowEdge, FlowEdgeLabel, FlowNodeLabel, RankedNode};
pub use order::{Order, OrderOptions, ordering};
pub use rank::{NodeRelationship, SpanningTree, find_spanning_tree, node_relationship};
