//! Graph container APIs used by `sankey-layout`.
//!
//! A directed multigraph with insertion-ordered nodes and edges. Parallel edges between the
//! same pair of nodes are told apart by an optional edge name (the flow's material, for
//! example).

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions, alg};
