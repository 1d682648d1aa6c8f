use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::directed::WeightedDigraph;
use crate::graph::traits::MutableGraph;
use crate::weight::Weight;
use crate::{Error, Result};

fn check_weight_range(min_weight: i64, max_weight: i64) -> Result<()> {
    if min_weight > max_weight {
        return Err(Error::InvalidArgument(format!(
            "empty weight range {}..={}",
            min_weight, max_weight
        )));
    }
    Ok(())
}

/// Generates a random directed graph with `n` vertices.
///
/// Every ordered pair `(i, j)`, self-loops included, receives an edge with
/// probability `p`. Weights are integers drawn uniformly from
/// `min_weight..=max_weight`. The same seed always yields the same graph.
///
/// Fails with [`Error::InvalidArgument`] when `p` is not a probability or
/// the weight range is empty.
pub fn random_graph<W: Weight>(
    n: usize,
    seed: u64,
    p: f64,
    min_weight: i64,
    max_weight: i64,
) -> Result<WeightedDigraph<W>> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!("{} is not a probability", p)));
    }
    check_weight_range(min_weight, max_weight)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedDigraph::new(n);

    for i in 0..n {
        for j in 0..n {
            if rng.gen_bool(p) {
                let weight = rng.gen_range(min_weight..=max_weight);
                graph.add_edge(i, j, W::from_f64(weight as f64))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random graph that is guaranteed to reach every vertex from 0.
///
/// A random spanning arborescence is laid down first, then about
/// `extra_edges` further edges are added between random pairs. An empty
/// weight range is an [`Error::InvalidArgument`].
pub fn random_connected_graph<W: Weight>(
    n: usize,
    seed: u64,
    extra_edges: usize,
    min_weight: i64,
    max_weight: i64,
) -> Result<WeightedDigraph<W>> {
    check_weight_range(min_weight, max_weight)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedDigraph::new(n);

    for child in 1..n {
        let parent = rng.gen_range(0..child);
        let weight = rng.gen_range(min_weight..=max_weight);
        graph.add_edge(parent, child, W::from_f64(weight as f64))?;
    }

    if n > 0 {
        for _ in 0..extra_edges {
            let from = rng.gen_range(0..n);
            let to = rng.gen_range(0..n);
            let weight = rng.gen_range(min_weight..=max_weight);
            graph.add_edge(from, to, W::from_f64(weight as f64))?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::Graph;

    #[test]
    fn same_seed_same_graph() {
        let a: WeightedDigraph<i64> = random_graph(30, 7, 0.3, 1, 10).unwrap();
        let b: WeightedDigraph<i64> = random_graph(30, 7, 0.3, 1, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn weights_stay_in_range() {
        let graph: WeightedDigraph<i64> = random_graph(20, 99, 0.5, 1, 10).unwrap();
        assert!(graph.edge_count() > 0);
        assert!(graph.edges().all(|(_, _, w)| (1..=10).contains(&w)));
    }

    #[test]
    fn connected_graph_reaches_everything() {
        let graph: WeightedDigraph<i64> = random_connected_graph(50, 3, 100, 1, 5).unwrap();
        for child in 1..50 {
            assert!((0..child).any(|parent| graph.has_edge(parent, child)));
        }
    }

    #[test]
    fn bad_arguments_are_errors() {
        for p in [-0.1, 1.5, f64::NAN] {
            let result: Result<WeightedDigraph<i64>> = random_graph(5, 1, p, 1, 10);
            assert!(matches!(result, Err(Error::InvalidArgument(_))), "p = {}", p);
        }

        let result: Result<WeightedDigraph<i64>> = random_graph(5, 1, 0.5, 10, 1);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        let result: Result<WeightedDigraph<i64>> = random_connected_graph(5, 1, 3, 4, 3);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        // a single-value range is fine
        let graph: WeightedDigraph<i64> = random_connected_graph(5, 1, 3, 7, 7).unwrap();
        assert!(graph.edges().all(|(_, _, w)| w == 7));
    }
}
