use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sankey_layout::graphlib::Graph;
use sankey_layout::order::{count_crossings, total_crossings};
use sankey_layout::{FlowEdgeLabel, FlowNodeLabel};
use std::hint::black_box;
use std::time::Duration;

type FlowGraph = Graph<FlowNodeLabel, FlowEdgeLabel>;

/// Two layers of `width` nodes joined by `fanout` edges per north node, spread with a fixed
/// stride so the edges cross heavily. Every `loop_every`th north node also gets a forward loop
/// to a node three slots to its right.
fn build_bilayer(width: usize, fanout: usize, loop_every: usize) -> (FlowGraph, Vec<Vec<String>>) {
    let north: Vec<String> = (0..width).map(|i| format!("n{i}")).collect();
    let south: Vec<String> = (0..width).map(|i| format!("s{i}")).collect();

    let mut g = FlowGraph::default();
    g.set_default_edge_label(|| FlowEdgeLabel::new(1.0));
    for v in north.iter().chain(&south) {
        g.set_node(v.clone(), FlowNodeLabel::default());
    }
    for (i, v) in north.iter().enumerate() {
        for k in 0..fanout {
            let j = (i * 7 + k * 13 + 5) % width;
            g.set_edge(v.clone(), south[j].clone());
        }
        if loop_every > 0 && i % loop_every == 0 && i + 3 < width {
            g.set_edge(v.clone(), north[i + 3].clone());
        }
    }

    (g, vec![north, south])
}

fn bench_cross_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_count");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("w50_f2", 50usize, 2usize, 0usize),
        ("w200_f4", 200usize, 4usize, 0usize),
        ("w200_f4_loops", 200usize, 4usize, 5usize),
        ("w1000_f3", 1000usize, 3usize, 0usize),
    ];

    for (name, width, fanout, loop_every) in cases {
        let (g, order) = build_bilayer(width, fanout, loop_every);
        group.bench_with_input(
            BenchmarkId::new("order::count_crossings", name),
            &(g, order),
            |b, (g, order)| {
                b.iter(|| black_box(count_crossings(g, &order[0], &order[1])));
            },
        );
    }

    let (g, order) = build_bilayer(200, 4, 5);
    let stacked: Vec<Vec<String>> = (0..8).map(|i| order[i % 2].clone()).collect();
    group.bench_function("order::total_crossings/stacked_8", |b| {
        b.iter(|| black_box(total_crossings(&g, black_box(&stacked))));
    });

    group.finish();
}

criterion_group!(benches, bench_cross_count);
criterion_main!(benches);
