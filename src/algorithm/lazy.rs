use crate::algorithm::dijkstra::search;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinQueue;
use crate::graph::Graph;
use crate::weight::Weight;
use crate::Result;

/// Dijkstra's algorithm with lazy deletion.
///
/// Improved vertices are pushed again rather than updated, so a vertex can
/// sit in the queue several times; entries for already settled vertices are
/// skipped as they come out.
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyDijkstra;

impl LazyDijkstra {
    /// Creates a new lazy Dijkstra instance
    pub fn new() -> Self {
        LazyDijkstra
    }

    /// Shortest distances from `source`, `W::infinity()` for unreached vertices
    pub fn distances<W, G>(&self, graph: &G, source: usize) -> Result<Vec<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let result = search(graph, source, LazyMinQueue::<W>::new(), "lazy")?;
        Ok(result.distances)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LazyDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Lazy Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        search(graph, source, LazyMinQueue::<W>::new(), "lazy")
    }
}
