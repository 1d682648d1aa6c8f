use crate::algorithm::dijkstra::search;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::Graph;
use crate::weight::Weight;
use crate::Result;

/// Dijkstra's algorithm with an indexed priority queue.
///
/// Each vertex holds at most one queue slot; improvements go through
/// `change_key`, so no stale entries are created on graphs with
/// non-negative weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct EagerDijkstra;

impl EagerDijkstra {
    /// Creates a new eager Dijkstra instance
    pub fn new() -> Self {
        EagerDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for EagerDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Eager Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let queue: IndexedPriorityQueue<W> = IndexedPriorityQueue::new(graph.vertex_count());
        search(graph, source, queue, "eager")
    }
}
