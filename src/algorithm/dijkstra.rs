use log::{debug, trace};

use crate::algorithm::{SearchStats, ShortestPathResult};
use crate::data_structures::{IndexedPriorityQueue, LazyMinQueue};
use crate::graph::Graph;
use crate::weight::Weight;
use crate::{Error, Result};

/// The queue a Dijkstra search draws its next vertex from.
///
/// `offer` is called every time a relaxation improves a vertex. How the
/// queue treats a vertex it already holds is what distinguishes the lazy and
/// eager searches.
pub trait Frontier<W> {
    fn offer(&mut self, distance: W, vertex: usize);

    fn pop_min(&mut self) -> Option<(W, usize)>;

    fn len(&self) -> usize;
}

/// Lazy: every improvement is a new entry; stale ones are dropped when popped.
impl<W: Weight> Frontier<W> for LazyMinQueue<W> {
    fn offer(&mut self, distance: W, vertex: usize) {
        self.push(distance, vertex);
    }

    fn pop_min(&mut self) -> Option<(W, usize)> {
        self.pop()
    }

    fn len(&self) -> usize {
        LazyMinQueue::len(self)
    }
}

/// Eager: an improvement updates the vertex in place (decrease-key).
impl<W: Weight> Frontier<W> for IndexedPriorityQueue<W> {
    fn offer(&mut self, distance: W, vertex: usize) {
        self.change_key(distance, vertex);
    }

    fn pop_min(&mut self) -> Option<(W, usize)> {
        self.pop()
    }

    fn len(&self) -> usize {
        IndexedPriorityQueue::len(self)
    }
}

/// Runs Dijkstra's relaxation loop from `source` until `frontier` is empty.
///
/// Weights are assumed non-negative. Negative weights are not rejected; they
/// simply produce distances that may fail the relaxation certificate.
pub(crate) fn search<W, G, F>(
    graph: &G,
    source: usize,
    mut frontier: F,
    variant: &str,
) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
    F: Frontier<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let n = graph.vertex_count();
    let mut best_distance_to = vec![W::infinity(); n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    // a vertex is settled once its edges have been relaxed
    let mut visited = vec![false; n];
    let mut stats = SearchStats::default();

    best_distance_to[source] = W::zero();
    frontier.offer(W::zero(), source);
    stats.offered += 1;
    stats.peak_len = frontier.len();

    while let Some((_, current)) = frontier.pop_min() {
        stats.popped += 1;
        if visited[current] {
            stats.stale += 1;
            continue;
        }
        visited[current] = true;

        for (neighbour, weight) in graph.neighbours(current) {
            // a sum past the top of the weight type is never an improvement
            let candidate = match best_distance_to[current].try_add(weight) {
                Some(candidate) => candidate,
                None => continue,
            };
            if candidate < best_distance_to[neighbour] {
                trace!("relax {} -> {}: {:?}", current, neighbour, candidate);
                best_distance_to[neighbour] = candidate;
                predecessors[neighbour] = Some(current);
                frontier.offer(candidate, neighbour);
                stats.offered += 1;
                stats.peak_len = stats.peak_len.max(frontier.len());
            }
        }
    }

    debug!(
        "{} from {}: offered {}, popped {}, stale {}, peak {}",
        variant, source, stats.offered, stats.popped, stats.stale, stats.peak_len
    );

    Ok(ShortestPathResult {
        distances: best_distance_to,
        predecessors,
        source,
        stats,
    })
}
