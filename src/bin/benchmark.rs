use ordered_float::OrderedFloat;
use sssp_check::graph::generators::random_connected_graph;
use sssp_check::graph::Graph;
use sssp_check::verify::certify;
use sssp_check::{
    EagerDijkstra, Error, LazyDijkstra, SearchStats, ShortestPathAlgorithm, WeightedDigraph,
};
use std::env;
use std::time::{Duration, Instant};

type Weight = OrderedFloat<f64>;

// Runs one variant, certifies its tree and reports timing and queue activity
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &WeightedDigraph<Weight>,
    source: usize,
) -> sssp_check::Result<(Duration, SearchStats)>
where
    A: ShortestPathAlgorithm<Weight, WeightedDigraph<Weight>>,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    let reachable = (0..graph.vertex_count())
        .filter(|&v| result.is_reachable(v))
        .count();
    let certificate = certify(&result.tree(graph)?, graph, source)?;
    println!(
        "  - Found {} reachable vertices in {:?}, certified: {}",
        reachable,
        duration,
        certificate.is_valid()
    );

    Ok((duration, result.stats))
}

fn main() -> sssp_check::Result<()> {
    env_logger::init();

    // Graph sizes can be given on the command line
    let mut graph_sizes = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<usize>()
                .map_err(|_| Error::InvalidArgument(format!("not a graph size: `{}`", arg)))
        })
        .collect::<sssp_check::Result<Vec<_>>>()?;
    if graph_sizes.is_empty() {
        graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];
    }

    // Average number of extra edges per vertex on top of the spanning tree
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Lazy vs Eager Dijkstra");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let lazy = LazyDijkstra::new();
    let eager = EagerDijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph: WeightedDigraph<Weight> =
            random_connected_graph(size, size as u64, size * edge_factor, 1, 100)?;
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (lazy_time, lazy_stats) = benchmark_algorithm(&lazy, &graph, source)?;
        let (eager_time, eager_stats) = benchmark_algorithm(&eager, &graph, source)?;

        let ratio = lazy_time.as_secs_f64() / eager_time.as_secs_f64();
        println!("Lazy / Eager time ratio: {:.2}x", ratio);

        results.push((size, lazy_time, eager_time, lazy_stats, eager_stats));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<8} | {:<12} | {:<12} | {:<10} | {:<10}",
        "Vertices", "Lazy (ms)", "Eager (ms)", "Ratio", "Lazy offers", "Eager offers",
        "Lazy peak", "Eager peak"
    );
    println!("-----------------------------------------------------");

    for (size, lazy_time, eager_time, lazy_stats, eager_stats) in &results {
        let ratio = lazy_time.as_secs_f64() / eager_time.as_secs_f64();
        println!(
            "{:<10} | {:<10} | {:<10} | {:<8.2} | {:<12} | {:<12} | {:<10} | {:<10}",
            size,
            lazy_time.as_millis(),
            eager_time.as_millis(),
            ratio,
            lazy_stats.offered,
            eager_stats.offered,
            lazy_stats.peak_len,
            eager_stats.peak_len
        );
    }

    Ok(())
}
