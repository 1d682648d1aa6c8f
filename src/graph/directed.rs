use std::collections::HashMap;
use std::fmt;

use crate::graph::traits::{Graph, MutableGraph};
use crate::weight::Weight;
use crate::{Error, Result};

/// A directed graph implementation using per-vertex adjacency maps.
///
/// The vertex count is fixed at construction. Each ordered pair holds at most
/// one weight, so adding the same edge twice overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDigraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: adjacency[from] -> {to: weight}
    adjacency: Vec<HashMap<usize, W>>,
}

impl<W> WeightedDigraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        WeightedDigraph {
            vertex_count: vertices,
            adjacency: vec![HashMap::new(); vertices],
        }
    }

    /// Number of vertices, fixed at construction
    pub fn size(&self) -> usize {
        self.vertex_count
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = WeightedDigraph::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns every edge as a `(from, to, weight)` triple, grouped by origin
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |(&to, &weight)| (from, to, weight)))
    }

    /// Copies the graph, converting every weight with `f`
    pub fn map_weights<U, F>(&self, mut f: F) -> WeightedDigraph<U>
    where
        U: Weight,
        F: FnMut(W) -> U,
    {
        WeightedDigraph {
            vertex_count: self.vertex_count,
            adjacency: self
                .adjacency
                .iter()
                .map(|edges| edges.iter().map(|(&to, &weight)| (to, f(weight))).collect())
                .collect(),
        }
    }

    /// Returns true if any edge has a weight below zero
    pub fn has_negative_weight(&self) -> bool {
        self.edges().any(|(_, _, weight)| weight < W::zero())
    }
}

impl<W> Default for WeightedDigraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        WeightedDigraph::new(0)
    }
}

impl<W> Graph<W> for WeightedDigraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(&to, &weight)| (to, weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if !self.has_vertex(to) {
            return false;
        }
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.contains_key(&to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Result<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(&to))
            .copied()
            .ok_or(Error::EdgeNotFound(from, to))
    }

    fn has_outgoing(&self, vertex: usize) -> bool {
        self.adjacency.get(vertex).map_or(false, |edges| !edges.is_empty())
    }
}

impl<W> MutableGraph<W> for WeightedDigraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        self.adjacency[from].insert(to, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(to) {
            return false;
        }
        match self.adjacency.get_mut(from) {
            Some(edges) => edges.remove(&to).is_some(),
            None => false,
        }
    }
}

impl<W> fmt::Display for WeightedDigraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", vertex)?;
            let mut sorted: Vec<_> = edges.iter().collect();
            sorted.sort_by_key(|(to, _)| **to);
            for (to, weight) in sorted {
                write!(f, " ({}, {})[{:?}]", vertex, to, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
