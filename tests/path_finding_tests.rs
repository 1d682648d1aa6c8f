use ordered_float::OrderedFloat;
use sssp_check::graph::generators::random_graph;
use sssp_check::graph::{Graph, MutableGraph};
use sssp_check::instrument::{Counted, OpCounts};
use sssp_check::verify::certify;
use sssp_check::{
    path_lengths_from_root, EagerDijkstra, Error, LazyDijkstra, ShortestPathAlgorithm, Weight,
    WeightedDigraph,
};

const TINY_DISTANCES: [i64; 8] = [0, 105, 26, 99, 38, 73, 151, 60];

fn tiny_graph<W: Weight>() -> WeightedDigraph<W> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/tiny_ewd.txt");
    WeightedDigraph::from_file(path).unwrap()
}

// Runs `algorithm` and checks its tree with the full verifier suite
fn assert_certified<W, A>(algorithm: &A, graph: &WeightedDigraph<W>, source: usize) -> Vec<W>
where
    W: Weight,
    A: ShortestPathAlgorithm<W, WeightedDigraph<W>>,
{
    let tree = algorithm.shortest_path_tree(graph, source).unwrap();
    let certificate = certify(&tree, graph, source).unwrap();
    assert!(certificate.subgraph, "{} tree is not a subgraph", algorithm.name());
    assert!(certificate.tree_shape, "{} tree is not a tree", algorithm.name());
    assert!(certificate.edges_relaxed, "{} tree is not optimal", algorithm.name());
    path_lengths_from_root(&tree, source).unwrap()
}

#[test]
fn tiny_graph_lazy_int() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let lengths = assert_certified(&LazyDijkstra::new(), &graph, 0);
    assert_eq!(lengths, TINY_DISTANCES);
}

#[test]
fn tiny_graph_eager_int() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let lengths = assert_certified(&EagerDijkstra::new(), &graph, 0);
    assert_eq!(lengths, TINY_DISTANCES);
}

#[test]
fn tiny_graph_float_weights() {
    let graph: WeightedDigraph<OrderedFloat<f64>> = tiny_graph();
    let expected: Vec<OrderedFloat<f64>> =
        TINY_DISTANCES.iter().map(|&d| OrderedFloat(d as f64)).collect();

    assert_eq!(assert_certified(&LazyDijkstra::new(), &graph, 0), expected);
    assert_eq!(assert_certified(&EagerDijkstra::new(), &graph, 0), expected);
}

#[test]
fn tiny_graph_tree_edges() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let tree = EagerDijkstra::new().shortest_path_tree(&graph, 0).unwrap();

    assert_eq!(tree.vertex_count(), 8);
    assert_eq!(tree.edge_count(), 7);
    for (from, to, weight) in [(0, 2, 26), (0, 4, 38), (2, 7, 34), (4, 5, 35), (7, 3, 39), (5, 1, 32), (3, 6, 52)] {
        assert_eq!(tree.edge_weight(from, to).unwrap(), weight);
    }
    // the input graph is left untouched
    assert_eq!(graph.edge_count(), 15);
}

#[test]
fn lazy_distances_match_tree_lengths() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let distances = LazyDijkstra::new().distances(&graph, 0).unwrap();
    assert_eq!(distances, TINY_DISTANCES);
}

#[test]
fn random_graph_int_both_variants() {
    let graph: WeightedDigraph<i64> = random_graph(500, 2353, 0.65, 1, 10).unwrap();

    let lazy = assert_certified(&LazyDijkstra::new(), &graph, 0);
    let eager = assert_certified(&EagerDijkstra::new(), &graph, 0);
    assert_eq!(lazy, eager);
}

#[test]
fn random_graph_float_both_variants() {
    let graph: WeightedDigraph<OrderedFloat<f64>> = random_graph(500, 2353, 0.65, 1, 10).unwrap();

    let lazy = assert_certified(&LazyDijkstra::new(), &graph, 0);
    let eager = assert_certified(&EagerDijkstra::new(), &graph, 0);
    assert_eq!(lazy, eager);
}

#[test]
fn sparse_random_graphs_from_every_source() {
    for seed in 0..5 {
        let graph: WeightedDigraph<i64> = random_graph(40, seed, 0.05, 0, 20).unwrap();
        for source in [0, 13, 39] {
            let lazy = assert_certified(&LazyDijkstra::new(), &graph, source);
            let eager = assert_certified(&EagerDijkstra::new(), &graph, source);
            assert_eq!(lazy, eager, "seed {} source {}", seed, source);
        }
    }
}

#[test]
fn queue_statistics() {
    let graph: WeightedDigraph<i64> = random_graph(200, 7, 0.3, 1, 10).unwrap();

    let lazy = LazyDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let eager = EagerDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let reachable = (0..graph.vertex_count()).filter(|&v| lazy.is_reachable(v)).count();

    // every lazy entry comes out eventually, stale ones included
    assert_eq!(lazy.stats.popped, lazy.stats.offered);
    assert_eq!(lazy.stats.popped - lazy.stats.stale, reachable);

    // one slot per vertex, never stale
    assert_eq!(eager.stats.stale, 0);
    assert_eq!(eager.stats.popped, reachable);
    assert!(eager.stats.peak_len <= graph.vertex_count());
}

#[test]
fn unreachable_vertices_stay_isolated() {
    let mut graph = WeightedDigraph::new(6);
    graph.add_edge(0, 1, 3i64).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(4, 5, 1).unwrap();
    graph.add_edge(5, 3, 1).unwrap();

    for tree in [
        LazyDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
        EagerDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
    ] {
        assert_eq!(tree.edge_count(), 2);
        assert!(!tree.has_outgoing(4));
        assert!(!tree.has_outgoing(5));
        let lengths = path_lengths_from_root(&tree, 0).unwrap();
        assert_eq!(lengths[..3], [0, 3, 7]);
        assert!(lengths[3..].iter().all(|&d| d == i64::infinity()));
        assert!(certify(&tree, &graph, 0).unwrap().is_valid());
    }

    let result = LazyDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(2), Some(7));
    assert_eq!(result.distance(4), None);
}

#[test]
fn single_vertex_graph() {
    let graph: WeightedDigraph<i64> = WeightedDigraph::new(1);
    let tree = LazyDijkstra::new().shortest_path_tree(&graph, 0).unwrap();
    assert_eq!(tree.vertex_count(), 1);
    assert_eq!(tree.edge_count(), 0);
    assert!(certify(&tree, &graph, 0).unwrap().is_valid());
}

#[test]
fn sums_past_the_integer_limit_are_not_paths() {
    let graph = WeightedDigraph::from_edges(3, [(0, 1, i32::MAX - 1), (1, 2, 5)]).unwrap();

    for tree in [
        LazyDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
        EagerDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
    ] {
        assert_eq!(tree.edge_count(), 1);
        assert!(!tree.has_outgoing(1));
        let lengths = path_lengths_from_root(&tree, 0).unwrap();
        assert_eq!(lengths, [0, i32::MAX - 1, i32::infinity()]);
        assert!(certify(&tree, &graph, 0).unwrap().is_valid());
    }

    let result = EagerDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(i32::MAX - 1));
    assert_eq!(result.distance(2), None);

    // the overflowing route through 1 must not hide the direct edge
    let graph =
        WeightedDigraph::from_edges(3, [(0, 1, 3i64), (1, 2, i64::MAX - 2), (0, 2, 10)]).unwrap();
    let lazy = assert_certified(&LazyDijkstra::new(), &graph, 0);
    let eager = assert_certified(&EagerDijkstra::new(), &graph, 0);
    assert_eq!(lazy, [0, 3, 10]);
    assert_eq!(lazy, eager);
}

#[test]
fn source_out_of_range() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    assert!(matches!(
        LazyDijkstra::new().compute_shortest_paths(&graph, 8),
        Err(Error::SourceNotFound)
    ));
    assert!(matches!(
        EagerDijkstra::new().compute_shortest_paths(&graph, 100),
        Err(Error::SourceNotFound)
    ));
}

#[test]
fn negative_weights_fail_the_certificate() {
    // 1 is settled at 1 and relaxes 3 before 2 lowers it to -2; the edge
    // (1, 3) is never looked at again
    let graph = WeightedDigraph::from_edges(
        4,
        [(0, 1, 1i64), (0, 2, 3), (2, 1, -5), (0, 3, 2), (1, 3, 2)],
    )
    .unwrap();

    for tree in [
        LazyDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
        EagerDijkstra::new().shortest_path_tree(&graph, 0).unwrap(),
    ] {
        let certificate = certify(&tree, &graph, 0).unwrap();
        assert!(certificate.subgraph);
        assert!(!certificate.edges_relaxed);
        assert!(!certificate.is_valid());
    }
}

#[test]
fn path_reconstruction() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let dijkstra = EagerDijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    let path = <EagerDijkstra as ShortestPathAlgorithm<i64, WeightedDigraph<i64>>>::get_path(
        &dijkstra, &result, 6,
    );
    assert_eq!(path, Some(vec![0, 2, 7, 3, 6]));

    let path = <EagerDijkstra as ShortestPathAlgorithm<i64, WeightedDigraph<i64>>>::get_path(
        &dijkstra, &result, 0,
    );
    assert_eq!(path, Some(vec![0]));
}

#[test]
fn counted_weights_give_the_same_distances() {
    let graph: WeightedDigraph<i64> = tiny_graph();
    let counts = OpCounts::new();
    let counted = graph.map_weights(|w| counts.wrap(w));

    let lazy = LazyDijkstra::new().distances(&counted, 0).unwrap();
    let lazy: Vec<i64> = lazy.iter().map(Counted::get).collect();
    assert_eq!(lazy, TINY_DISTANCES);

    let lazy_ops = counts.snapshot();
    assert_eq!(lazy_ops.constructions, 15);
    assert!(lazy_ops.additions > 0);
    assert!(lazy_ops.comparisons > 0);

    counts.clear();
    let tree = EagerDijkstra::new().shortest_path_tree(&counted, 0).unwrap();
    let eager: Vec<i64> = path_lengths_from_root(&tree, 0)
        .unwrap()
        .iter()
        .map(Counted::get)
        .collect();
    assert_eq!(eager, TINY_DISTANCES);
    assert_eq!(counts.snapshot().constructions, 0);
    assert!(counts.snapshot().additions > 0);
}
