use std::fmt::Debug;

use crate::weight::Weight;
use crate::Result;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the `(neighbour, weight)` pairs leaving a vertex.
    ///
    /// The order is unspecified. Calling it again restarts the enumeration;
    /// an out-of-range vertex yields nothing.
    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices.
    /// Out-of-range queries are simply false.
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge, failing with `EdgeNotFound` if it is absent
    fn edge_weight(&self, from: usize, to: usize) -> Result<W>;

    /// Returns true if the vertex has at least one outgoing edge
    fn has_outgoing(&self, vertex: usize) -> bool {
        self.neighbours(vertex).next().is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a directed edge, overwriting the weight of an existing one.
    /// Fails with `InvalidVertex` when either endpoint is out of range.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph. Absent edges and out-of-range
    /// endpoints are ignored; the return value tells whether anything was removed.
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
