//! Weighted-median sweep.

use super::layer_index::{LayerIndex, for_each_neighbour};
use super::types::{NO_PREFERENCE, SweepDirection};
use crate::graphlib::Graph;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Median of ascending `positions`, or [`NO_PREFERENCE`] when there are none.
///
/// For an even count above two the two middle values are weighted by the spread of the
/// opposite half, pulling the result toward the tighter cluster of neighbours.
pub fn median_value(positions: &[f64]) -> f64 {
    let n = positions.len();
    if n == 0 {
        return NO_PREFERENCE;
    }
    let m = n / 2;
    if n % 2 == 1 {
        return positions[m];
    }
    if n == 2 {
        return (positions[0] + positions[1]) / 2.0;
    }

    let left = positions[m - 1] - positions[0];
    let right = positions[n - 1] - positions[m];
    if left + right == 0.0 {
        return (positions[m - 1] + positions[m]) / 2.0;
    }
    (positions[m - 1] * right + positions[m] * left) / (left + right)
}

/// Positions, within layer `neighbour_layer`, of the neighbours of `node` (which sits in layer
/// `layer`), ascending, one entry per edge.
///
/// With `include_loops`, a node that has no neighbours in `neighbour_layer` but a loop edge to
/// another node of its own layer is placed just after that partner: its single position is
/// the partner's median plus `0.5`.
pub fn neighbour_positions<N, E>(
    g: &Graph<N, E>,
    order: &[Vec<String>],
    layer: usize,
    neighbour_layer: usize,
    node: &str,
    include_loops: bool,
) -> Vec<f64>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let (Some(own), Some(reference)) = (order.get(layer), order.get(neighbour_layer)) else {
        return Vec::new();
    };
    positions_against(
        g,
        &LayerIndex::new(own),
        &LayerIndex::new(reference),
        node,
        include_loops,
    )
}

fn positions_against<N, E>(
    g: &Graph<N, E>,
    own: &LayerIndex,
    reference: &LayerIndex,
    node: &str,
    include_loops: bool,
) -> Vec<f64>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let mut positions: Vec<f64> = Vec::new();
    for_each_neighbour(g, node, |w| {
        if let Some(j) = reference.get(w) {
            positions.push(j as f64);
        }
    });

    if positions.is_empty() && include_loops {
        if let Some(partner) = loop_partner(g, own, node) {
            let partner_positions = positions_against(g, own, reference, &partner, false);
            let median = median_value(&partner_positions);
            if median != NO_PREFERENCE {
                positions.push(median + 0.5);
            }
        }
    }

    positions.sort_by(f64::total_cmp);
    positions
}

// First node of the same layer joined to `node` by an edge, out-edges first.
fn loop_partner<N, E>(g: &Graph<N, E>, own: &LayerIndex, node: &str) -> Option<String>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let mut partner: Option<String> = None;
    for_each_neighbour(g, node, |w| {
        if partner.is_none() && w != node && own.get(w).is_some() {
            partner = Some(w.to_string());
        }
    });
    partner
}

/// Stable in-place sort of `seq` by `positions`.
///
/// Entries whose position is [`NO_PREFERENCE`] (or missing) keep their absolute slot; the
/// remaining entries are stably sorted by position into the remaining slots.
pub fn sort_by_positions<T, S>(seq: &mut [T], positions: &HashMap<T, f64, S>)
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    let position_of = |v: &T| positions.get(v).copied().unwrap_or(NO_PREFERENCE);

    let slots: Vec<usize> = (0..seq.len())
        .filter(|&i| position_of(&seq[i]) != NO_PREFERENCE)
        .collect();
    let mut movable: Vec<(f64, T)> = slots
        .iter()
        .map(|&i| (position_of(&seq[i]), seq[i].clone()))
        .collect();
    movable.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (slot, (_, v)) in slots.into_iter().zip(movable) {
        seq[slot] = v;
    }
}

/// One sweep over `order`, reordering every layer except the first one visited, which stays
/// fixed as the initial reference. Loop partners are taken into account.
pub fn sort_nodes<N, E>(g: &Graph<N, E>, order: &mut [Vec<String>], direction: SweepDirection)
where
    N: Default + 'static,
    E: Default + 'static,
{
    sweep(g, order, direction, true);
}

pub(crate) fn sweep<N, E>(
    g: &Graph<N, E>,
    order: &mut [Vec<String>],
    direction: SweepDirection,
    include_loops: bool,
) where
    N: Default + 'static,
    E: Default + 'static,
{
    let n = order.len();
    if n < 2 {
        return;
    }
    let steps: Vec<(usize, usize)> = match direction {
        SweepDirection::Forward => (1..n).map(|i| (i, i - 1)).collect(),
        SweepDirection::Backward => (0..n - 1).rev().map(|i| (i, i + 1)).collect(),
    };

    let mut index: Vec<LayerIndex> = order.iter().map(|layer| LayerIndex::new(layer)).collect();
    for (layer, reference) in steps {
        let medians: FxHashMap<String, f64> = order[layer]
            .iter()
            .map(|v| {
                let positions =
                    positions_against(g, &index[layer], &index[reference], v, include_loops);
                (v.clone(), median_value(&positions))
            })
            .collect();
        sort_by_positions(&mut order[layer], &medians);
        index[layer] = LayerIndex::new(&order[layer]);
    }
}
