use super::layer_index::{LayerIndex, for_each_neighbour};
use crate::graphlib::Graph;
use crate::model::FlowEdge;

/// Crossings between two adjacent layers, including those caused by same-layer loop edges.
pub fn count_crossings<N, E>(g: &Graph<N, E>, layer_a: &[String], layer_b: &[String]) -> usize
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    count_between_crossings(g, layer_a, layer_b) + count_loop_crossings(g, layer_a, layer_b)
}

/// Sum of [`count_crossings`] over every pair of adjacent layers.
pub fn total_crossings<N, E>(g: &Graph<N, E>, order: &[Vec<String>]) -> usize
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    order
        .windows(2)
        .map(|pair| count_crossings(g, &pair[0], &pair[1]))
        .sum()
}

/// Crossings among edges joining `layer_a` and `layer_b`, in either direction.
///
/// Bilayer cross counting after Barth, Mutzel and Jünger (JGAA 8(2), 2004): list the south
/// positions reached from each north node in north order, then count inversions with an
/// accumulator tree over the shorter layer. Each connected pair of nodes counts once, however
/// many parallel edges join them.
pub fn count_between_crossings<N, E>(
    g: &Graph<N, E>,
    layer_a: &[String],
    layer_b: &[String],
) -> usize
where
    N: Default + 'static,
    E: Default + 'static,
{
    let (north, south) = if layer_a.len() > layer_b.len() {
        (layer_a, layer_b)
    } else {
        (layer_b, layer_a)
    };
    if south.is_empty() {
        return 0;
    }

    let south_pos = LayerIndex::new(south);
    let mut south_seq: Vec<usize> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    for u in north {
        row.clear();
        for_each_neighbour(g, u, |w| {
            if let Some(j) = south_pos.get(w) {
                row.push(j);
            }
        });
        row.sort_unstable();
        row.dedup();
        south_seq.extend_from_slice(&row);
    }

    count_inversions(&south_seq, south.len())
}

fn count_inversions(south_seq: &[usize], q: usize) -> usize {
    let mut first_index: usize = 1;
    while first_index < q {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut count: usize = 0;
    for &k in south_seq {
        let mut index = k + first_index;
        tree[index] += 1;
        while index > 0 {
            // Odd indices are left children: everything already counted under the right
            // sibling sits further south and crosses this edge.
            if index % 2 == 1 {
                count += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
    }

    count
}

/// Extra crossings caused by loop edges drawn within a layer.
///
/// In `layer_a`, forward (non-reversed) same-layer edges are considered; in `layer_b`,
/// reversed ones. A loop spanning positions `i < j` is crossed by every between-layer edge
/// whose endpoint sits strictly between `i` and `j`. Self-loops are ignored.
pub fn count_loop_crossings<N, E>(
    g: &Graph<N, E>,
    layer_a: &[String],
    layer_b: &[String],
) -> usize
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
{
    let index_a = LayerIndex::new(layer_a);
    let index_b = LayerIndex::new(layer_b);
    let cross_a = loop_coverage(g, layer_a, &index_a, |label| !label.is_reverse());
    let cross_b = loop_coverage(g, layer_b, &index_b, |label| label.is_reverse());

    if cross_a.iter().all(|&c| c == 0) && cross_b.iter().all(|&c| c == 0) {
        return 0;
    }

    let mut count: usize = 0;
    let mut row: Vec<usize> = Vec::new();
    for (i, u) in layer_a.iter().enumerate() {
        row.clear();
        for_each_neighbour(g, u, |w| {
            if let Some(j) = index_b.get(w) {
                row.push(j);
            }
        });
        row.sort_unstable();
        row.dedup();
        for &j in &row {
            count += cross_a[i] + cross_b[j];
        }
    }

    count
}

/// Number of selected loop edges passing over each position of `layer`.
fn loop_coverage<N, E, F>(
    g: &Graph<N, E>,
    layer: &[String],
    index: &LayerIndex,
    select: F,
) -> Vec<usize>
where
    N: Default + 'static,
    E: Default + FlowEdge + 'static,
    F: Fn(&E) -> bool,
{
    // Difference array; prefix sums give the coverage.
    let mut delta: Vec<isize> = vec![0; layer.len() + 1];
    for (i, u) in layer.iter().enumerate() {
        g.for_each_out_edge(u, None, |key, label| {
            if key.is_self_loop() || !select(label) {
                return;
            }
            let Some(k) = index.get(&key.w) else {
                return;
            };
            let (lo, hi) = if i < k { (i, k) } else { (k, i) };
            if hi > lo + 1 {
                delta[lo + 1] += 1;
                delta[hi] -= 1;
            }
        });
    }

    let mut coverage: Vec<usize> = Vec::with_capacity(layer.len());
    let mut running: isize = 0;
    for d in &delta[..layer.len()] {
        running += d;
        coverage.push(running.max(0) as usize);
    }
    coverage
}
