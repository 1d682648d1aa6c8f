use std::collections::HashSet;

use log::warn;
use serde::Serialize;

use crate::graph::{Graph, MutableGraph, WeightedDigraph};
use crate::weight::Weight;
use crate::Result;

/// Queue activity recorded during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries handed to the queue, the initial source entry included
    pub offered: usize,

    /// Entries taken out of the queue
    pub popped: usize,

    /// Popped entries discarded because their vertex was already settled
    pub stale: usize,

    /// Largest number of entries held by the queue at once
    pub peak_len: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Best distance found to each vertex, `W::infinity()` when unreached
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Queue activity of the run
    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Returns true if the search reached `vertex`
    pub fn is_reachable(&self, vertex: usize) -> bool {
        vertex == self.source || self.predecessors.get(vertex).map_or(false, Option::is_some)
    }

    /// Distance to `vertex`, or `None` if it was never reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        if self.is_reachable(vertex) {
            self.distances.get(vertex).copied()
        } else {
            None
        }
    }

    /// Builds the shortest path tree as a new graph with the same vertex count.
    ///
    /// Every vertex with a predecessor `p` contributes the edge `(p, v)` with
    /// its weight taken from `graph`. The source and unreached vertices
    /// contribute nothing.
    pub fn tree<G: Graph<W>>(&self, graph: &G) -> Result<WeightedDigraph<W>> {
        let mut tree = WeightedDigraph::new(self.predecessors.len());
        for (vertex, parent) in self.predecessors.iter().enumerate() {
            if let Some(parent) = *parent {
                tree.add_edge(parent, vertex, graph.edge_weight(parent, vertex)?)?;
            }
        }
        Ok(tree)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest path tree rooted at `source`.
    ///
    /// The input graph is only borrowed; the returned tree owns its edges.
    fn shortest_path_tree(&self, graph: &G, source: usize) -> Result<WeightedDigraph<W>> {
        self.compute_shortest_paths(graph, source)?.tree(graph)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current) {
                warn!("cycle in predecessors at vertex {}", current);
                return None;
            }
            path.push(current);
            current = result.predecessors[current]?;
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}
