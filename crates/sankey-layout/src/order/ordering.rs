use super::types::{Order, SweepDirection};
use super::weighted_median::sweep;
use super::{init_order, total_crossings};
use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::model::{FlowEdge, RankedNode};
use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderOptions {
    /// Upper bound on the number of sweeps.
    pub max_sweeps: usize,
    /// Consecutive sweeps without fewer crossings before giving up.
    pub patience: usize,
    /// Whether nodes without cross-layer neighbours follow their same-layer loop partner.
    pub include_loops: bool,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            max_sweeps: 24,
            patience: 4,
            include_loops: true,
        }
    }
}

/// Checks that every node of `g` appears exactly once in `order` and nothing else does.
pub fn validate_order<N, E>(g: &Graph<N, E>, order: &[Vec<String>]) -> Result<()>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let mut seen: HashSet<&str> = HashSet::default();
    for v in order.iter().flatten() {
        if !g.has_node(v) {
            return Err(Error::UnknownNode { node: v.clone() });
        }
        if !seen.insert(v.as_str()) {
            return Err(Error::DuplicateNode { node: v.clone() });
        }
    }
    if seen.len() != g.node_count() {
        if let Some(v) = g.nodes().find(|v| !seen.contains(v)) {
            return Err(Error::UnplacedNode {
                node: v.to_string(),
            });
        }
    }
    Ok(())
}

/// Crossing-minimized copy of `order` using [`OrderOptions::default`].
pub fn ordering<N, E>(g: &Graph<N, E>, order: &[Vec<String>]) -> Result<Order>
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    ordering_with_options(g, order, OrderOptions::default())
}

/// Alternates forward and backward weighted-median sweeps, starting forward, and returns the
/// order with the fewest crossings seen (the input order included).
///
/// Stops once an order without crossings is found, after `patience` sweeps in a row fail to
/// improve on the best, or after `max_sweeps` sweeps.
pub fn ordering_with_options<N, E>(
    g: &Graph<N, E>,
    order: &[Vec<String>],
    opts: OrderOptions,
) -> Result<Order>
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    validate_order(g, order)?;

    let mut current: Order = order.to_vec();
    let mut best: Order = current.clone();
    let mut best_cc = total_crossings(g, &best);
    debug!(layers = order.len(), crossings = best_cc, "initial order");

    let mut direction = SweepDirection::Forward;
    let mut since_best: usize = 0;
    for i in 0..opts.max_sweeps {
        if best_cc == 0 || since_best >= opts.patience {
            break;
        }

        sweep(g, &mut current, direction, opts.include_loops);
        let cc = total_crossings(g, &current);
        debug!(sweep = i, ?direction, crossings = cc, best = best_cc, "ordering sweep");

        if cc < best_cc {
            best_cc = cc;
            best.clone_from(&current);
            since_best = 0;
        } else {
            since_best += 1;
        }
        direction = direction.flip();
    }

    Ok(best)
}

/// [`init_order`] followed by [`ordering_with_options`].
pub fn order_ranked<N, E>(g: &Graph<N, E>, opts: OrderOptions) -> Result<Order>
where
    N: Default + RankedNode + 'static,
    E: Default + FlowEdge + 'static,
{
    let initial = init_order(g)?;
    ordering_with_options(g, &initial, opts)
}
