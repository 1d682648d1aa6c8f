use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordered_float::OrderedFloat;
use sssp_check::graph::generators::{random_connected_graph, random_graph};
use sssp_check::verify::certify;
use sssp_check::{EagerDijkstra, LazyDijkstra, ShortestPathAlgorithm, WeightedDigraph};

type Float = OrderedFloat<f64>;

fn bench_lazy_vs_eager(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra Variants");

    // Sparse graphs: a spanning tree plus about three extra edges per vertex
    for &n in &[100, 1_000, 10_000] {
        let graph: WeightedDigraph<Float> = random_connected_graph(n, 42, 3 * n, 1, 100).unwrap();

        group.bench_with_input(BenchmarkId::new("Lazy_Sparse", n), &graph, |b, graph| {
            b.iter(|| black_box(LazyDijkstra::new().compute_shortest_paths(graph, 0)))
        });

        group.bench_with_input(BenchmarkId::new("Eager_Sparse", n), &graph, |b, graph| {
            b.iter(|| black_box(EagerDijkstra::new().compute_shortest_paths(graph, 0)))
        });
    }

    // Dense graphs, where decrease-key saves the most queue entries
    for &n in &[100, 300] {
        let graph: WeightedDigraph<i64> = random_graph(n, 2353, 0.65, 1, 10).unwrap();

        group.bench_with_input(BenchmarkId::new("Lazy_Dense", n), &graph, |b, graph| {
            b.iter(|| black_box(LazyDijkstra::new().compute_shortest_paths(graph, 0)))
        });

        group.bench_with_input(BenchmarkId::new("Eager_Dense", n), &graph, |b, graph| {
            b.iter(|| black_box(EagerDijkstra::new().compute_shortest_paths(graph, 0)))
        });
    }

    group.finish();
}

fn bench_certificate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Certificate");

    for &n in &[1_000, 10_000] {
        let graph: WeightedDigraph<Float> = random_connected_graph(n, 123, 3 * n, 1, 100).unwrap();
        let tree = match EagerDijkstra::new().shortest_path_tree(&graph, 0) {
            Ok(tree) => tree,
            Err(err) => panic!("search failed: {}", err),
        };

        group.bench_with_input(BenchmarkId::new("Certify", n), &n, |b, &_| {
            b.iter(|| black_box(certify(&tree, &graph, 0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lazy_vs_eager, bench_certificate);
criterion_main!(benches);
