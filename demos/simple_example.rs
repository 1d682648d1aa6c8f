use ordered_float::OrderedFloat;
use sssp_check::graph::{Graph, MutableGraph};
use sssp_check::verify::certify;
use sssp_check::{EagerDijkstra, LazyDijkstra, ShortestPathAlgorithm, WeightedDigraph};

type Weight = OrderedFloat<f64>;

fn main() -> sssp_check::Result<()> {
    // Create a simple directed graph with vertices 0-4
    let mut graph = WeightedDigraph::new(5);

    // Add edges with weights
    graph.add_edge(0, 1, OrderedFloat(10.0))?;
    graph.add_edge(0, 2, OrderedFloat(5.0))?;
    graph.add_edge(1, 3, OrderedFloat(1.0))?;
    graph.add_edge(2, 1, OrderedFloat(3.0))?;
    graph.add_edge(2, 3, OrderedFloat(9.0))?;
    graph.add_edge(2, 4, OrderedFloat(2.0))?;
    graph.add_edge(3, 4, OrderedFloat(4.0))?;
    graph.add_edge(4, 0, OrderedFloat(7.0))?;
    graph.add_edge(4, 3, OrderedFloat(6.0))?;

    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    // Lazy variant: distances and paths
    let lazy = LazyDijkstra::new();
    let lazy_result = lazy.compute_shortest_paths(&graph, source)?;

    println!("\n{} results:", ShortestPathAlgorithm::<Weight, WeightedDigraph<Weight>>::name(&lazy));
    for v in 0..graph.vertex_count() {
        match lazy_result.distance(v) {
            Some(dist) => {
                let path = ShortestPathAlgorithm::<Weight, WeightedDigraph<Weight>>::get_path(
                    &lazy,
                    &lazy_result,
                    v,
                );
                println!("Vertex {}: distance = {:.1}, path = {:?}", v, dist.into_inner(), path);
            }
            None => println!("Vertex {}: unreachable", v),
        }
    }

    // Eager variant: build the tree and certify it
    let eager = EagerDijkstra::new();
    let tree = eager.shortest_path_tree(&graph, source)?;

    println!("\n{} tree:", ShortestPathAlgorithm::<Weight, WeightedDigraph<Weight>>::name(&eager));
    print!("{}", tree);

    let certificate = certify(&tree, &graph, source)?;
    println!(
        "\nsubgraph: {}, tree shape: {}, edges relaxed: {}",
        certificate.subgraph, certificate.tree_shape, certificate.edges_relaxed
    );

    Ok(())
}
