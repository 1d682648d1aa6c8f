//! Independent checks for shortest path trees.
//!
//! None of these functions compute shortest paths. Together they certify a
//! tree produced elsewhere: the tree only uses edges of the graph, it is an
//! out-arborescence from the source plus isolated vertices, and the distances
//! it implies leave no edge of the graph relaxable.

use std::collections::VecDeque;

use log::debug;
use serde::Serialize;

use crate::graph::Graph;
use crate::weight::Weight;
use crate::{Error, Result};

/// Returns true if every edge of `h` exists in `g` with exactly the same weight.
///
/// `h` may have fewer vertices than `g`, never more. Only edges of `h` are
/// checked; extra edges in `g` are irrelevant.
pub fn is_subgraph<W, H, G>(h: &H, g: &G) -> bool
where
    W: Weight,
    H: Graph<W>,
    G: Graph<W>,
{
    if h.vertex_count() > g.vertex_count() {
        return false;
    }
    for from in 0..h.vertex_count() {
        for (to, weight) in h.neighbours(from) {
            match g.edge_weight(from, to) {
                Ok(expected) if expected == weight => {}
                Ok(expected) => {
                    debug!("edge ({}, {}) weighs {:?}, expected {:?}", from, to, weight, expected);
                    return false;
                }
                Err(_) => {
                    debug!("edge ({}, {}) is not in the graph", from, to);
                    return false;
                }
            }
        }
    }
    true
}

/// Returns true if the edges of `tree` form an out-arborescence rooted at
/// `root`, with every vertex it does not reach left without outgoing edges.
///
/// A breadth-first search fails as soon as an edge leads to a vertex that was
/// already seen, which catches both cycles and vertices with two parents.
pub fn is_tree_plus_isolated<W, G>(tree: &G, root: usize) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    let n = tree.vertex_count();
    if root >= n {
        return false;
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        for (neighbour, _) in tree.neighbours(current) {
            if visited[neighbour] {
                debug!("edge ({}, {}) reaches an already visited vertex", current, neighbour);
                return false;
            }
            visited[neighbour] = true;
            queue.push_back(neighbour);
        }
    }

    match (0..n).find(|&v| !visited[v] && tree.has_outgoing(v)) {
        Some(vertex) => {
            debug!("vertex {} is unreachable from {} but not isolated", vertex, root);
            false
        }
        None => true,
    }
}

/// Distance from `root` to every vertex along the edges of `tree`.
///
/// `tree` must already satisfy [`is_tree_plus_isolated`]; on other graphs the
/// result is the breadth-first accumulation along first discoveries and
/// carries no meaning. Vertices the tree does not reach stay at
/// `W::infinity()`. Fails with [`Error::DistanceOverflow`] when a root
/// distance does not fit the weight type.
pub fn path_lengths_from_root<W, G>(tree: &G, root: usize) -> Result<Vec<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = tree.vertex_count();
    if root >= n {
        return Err(Error::InvalidVertex(root));
    }

    let mut distances = vec![W::infinity(); n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    distances[root] = W::zero();
    visited[root] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        for (child, weight) in tree.neighbours(current) {
            if visited[child] {
                continue;
            }
            visited[child] = true;
            distances[child] = distances[current]
                .try_add(weight)
                .ok_or(Error::DistanceOverflow(child))?;
            queue.push_back(child);
        }
    }

    Ok(distances)
}

/// Checks the shortest path optimality certificate.
///
/// Fails if `distances[source]` is not zero or if some edge `(u, v, w)` of
/// `g` has `distances[v] > distances[u] + w`. Comparison is exact, with no
/// floating point tolerance. Edges leaving a vertex at `W::infinity()` are
/// skipped: an unreached tail cannot offer a shorter path. A sum that does
/// not fit the weight type is compared by its sign, so integer weights near
/// the limits never overflow.
pub fn all_edges_relaxed<W, G>(distances: &[W], g: &G, source: usize) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    if distances.len() < g.vertex_count() {
        debug!(
            "{} distances for a graph of {} vertices",
            distances.len(),
            g.vertex_count()
        );
        return false;
    }
    match distances.get(source) {
        Some(d) if *d == W::zero() => {}
        _ => {
            debug!("source {} is not at distance zero", source);
            return false;
        }
    }

    let infinity = W::infinity();
    for u in 0..g.vertex_count() {
        let from = distances[u];
        if from == infinity {
            continue;
        }
        for (v, weight) in g.neighbours(u) {
            let relaxes = match from.try_add(weight) {
                Some(bound) => distances[v] > bound,
                // the true sum lies below the smallest value when the
                // weight is negative, above the largest otherwise
                None => weight < W::zero(),
            };
            if relaxes {
                debug!(
                    "edge ({}, {}) of weight {:?} relaxes {:?} from {:?}",
                    u, v, weight, distances[v], from
                );
                return false;
            }
        }
    }
    true
}

/// Outcome of [`certify`], one flag per check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub subgraph: bool,
    pub tree_shape: bool,
    pub edges_relaxed: bool,
}

impl Certificate {
    /// True when the tree passed every check
    pub fn is_valid(&self) -> bool {
        self.subgraph && self.tree_shape && self.edges_relaxed
    }
}

/// Runs the full verifier suite on a tree claimed to be a shortest path tree
/// of `graph` rooted at `source`.
///
/// Distances are only derived, and the relaxation check only run, when the
/// tree shape holds.
pub fn certify<W, T, G>(tree: &T, graph: &G, source: usize) -> Result<Certificate>
where
    W: Weight,
    T: Graph<W>,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let subgraph = is_subgraph(tree, graph);
    let tree_shape = is_tree_plus_isolated(tree, source);
    let edges_relaxed = if tree_shape {
        let distances = path_lengths_from_root(tree, source)?;
        all_edges_relaxed(&distances, graph, source)
    } else {
        false
    };

    Ok(Certificate {
        subgraph,
        tree_shape,
        edges_relaxed,
    })
}
