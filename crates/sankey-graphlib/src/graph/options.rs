//! Graph configuration options.

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    /// When `false`, edge names are dropped and at most one edge exists per `(v, w)` pair.
    pub multigraph: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { multigraph: true }
    }
}
