use super::types::Order;
use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::model::RankedNode;

/// Largest number of layers [`init_order`] will allocate, empty ones included.
pub const MAX_LAYERS: usize = 1 << 16;

/// Initial order from node ranks.
///
/// Nodes are visited depth first along out-edges, starting from nodes sorted by rank (ties
/// keep insertion order); each node is appended to its rank's layer when first reached. The
/// smallest rank becomes layer 0; ranks with no nodes give empty layers. Fails with
/// [`Error::RankSpan`] when the ranks span more than [`MAX_LAYERS`] layers.
pub fn init_order<N, E>(g: &Graph<N, E>) -> Result<Order>
where
    N: Default + RankedNode + 'static,
    E: Default + 'static,
{
    let mut ranks: Vec<i32> = Vec::with_capacity(g.node_count());
    for v in g.nodes() {
        let Some(rank) = g.node(v).and_then(|n| n.rank()) else {
            return Err(Error::MissingRank {
                node: v.to_string(),
            });
        };
        ranks.push(rank);
    }
    let (Some(&min_rank), Some(&max_rank)) = (ranks.iter().min(), ranks.iter().max()) else {
        return Ok(Vec::new());
    };

    let span = i64::from(max_rank) - i64::from(min_rank) + 1;
    let layer_count = match usize::try_from(span) {
        Ok(n) if n <= MAX_LAYERS => n,
        _ => {
            return Err(Error::RankSpan {
                min: min_rank,
                max: max_rank,
                limit: MAX_LAYERS,
            });
        }
    };

    let mut layers: Order = vec![Vec::new(); layer_count];
    let mut visited: Vec<bool> = vec![false; ranks.len()];

    // `sort_by_key` is stable, so equal ranks keep insertion order.
    let mut starts: Vec<usize> = (0..ranks.len()).collect();
    starts.sort_by_key(|&ix| ranks[ix]);

    for start in starts {
        let mut stack: Vec<usize> = vec![start];
        while let Some(ix) = stack.pop() {
            if visited[ix] {
                continue;
            }
            visited[ix] = true;
            let Some(v) = g.node_id_by_ix(ix) else {
                continue;
            };
            layers[(i64::from(ranks[ix]) - i64::from(min_rank)) as usize].push(v.to_string());

            let successors = g.successors(v);
            for w in successors.into_iter().rev() {
                if let Some(w_ix) = g.node_ix(w) {
                    if !visited[w_ix] {
                        stack.push(w_ix);
                    }
                }
            }
        }
    }

    Ok(layers)
}
