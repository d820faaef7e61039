//! Per-layer position lookup shared by the sweep and the crossing counter.

use crate::graphlib::Graph;
use rustc_hash::FxHashMap as HashMap;

/// Node id → index within one layer.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayerIndex {
    positions: HashMap<String, usize>,
}

impl LayerIndex {
    pub(crate) fn new(layer: &[String]) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::default();
        positions.reserve(layer.len());
        for (i, v) in layer.iter().enumerate() {
            positions.insert(v.clone(), i);
        }
        Self { positions }
    }

    pub(crate) fn get(&self, v: &str) -> Option<usize> {
        self.positions.get(v).copied()
    }
}

/// Calls `f` with the other endpoint of every edge incident to `v`, out-edges first. Parallel
/// edges yield their endpoint once per edge.
pub(crate) fn for_each_neighbour<N, E, F>(g: &Graph<N, E>, v: &str, mut f: F)
where
    N: Default + 'static,
    E: Default + 'static,
    F: FnMut(&str),
{
    g.for_each_out_edge(v, None, |key, _| f(&key.w));
    g.for_each_in_edge(v, None, |key, _| f(&key.v));
}
