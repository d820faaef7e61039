#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("spanning tree root is not a node of the graph: {root}")]
    InvalidRoot { root: String },

    #[error("order references a node that is not in the graph: {node}")]
    UnknownNode { node: String },

    #[error("node appears more than once in the order: {node}")]
    DuplicateNode { node: String },

    #[error("graph node is missing from the order: {node}")]
    UnplacedNode { node: String },

    #[error("node has no rank assigned: {node}")]
    MissingRank { node: String },

    #[error("ranks {min}..={max} span more than {limit} layers")]
    RankSpan { min: i32, max: i32, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
