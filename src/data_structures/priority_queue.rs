use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-queue of `(priority, vertex)` pairs backed by [`BinaryHeap`].
///
/// The same vertex may be queued any number of times; nothing is ever
/// updated in place. Pairs compare lexicographically, so equal priorities
/// pop in ascending vertex order.
#[derive(Debug, Clone)]
pub struct LazyMinQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> LazyMinQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        LazyMinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `vertex` with `priority`, alongside any earlier entries for it
    pub fn push(&mut self, priority: P, vertex: usize) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(P, usize)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(P, usize)> {
        self.heap.peek().map(|Reverse(entry)| *entry)
    }
}

impl<P> Default for LazyMinQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
