use std::fmt::Debug;

use log::warn;

/// A binary min-heap over integer names with O(log n) decrease-key and erase.
///
/// Names live in `[0, max_size)`. The heap itself only stores names; their
/// priorities and heap positions are looked up in side tables indexed by name:
///
/// - `heap[i]` is the name in slot `i`, slots are 1-based (`heap[0]` is unused)
///   so the children of `i` are `2i` and `2i + 1`
/// - `position[name]` is the slot holding `name`, `None` when absent
/// - `priorities[name]` is the priority of `name` while it is present
///
/// Heap order: `priority(heap[i]) <= priority(heap[2i])` and
/// `priority(heap[i]) <= priority(heap[2i + 1])` for every occupied child.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T>
where
    T: PartialOrd + Clone + Debug,
{
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    priorities: Vec<Option<T>>,
    max_size: usize,
}

impl<T> IndexedPriorityQueue<T>
where
    T: PartialOrd + Clone + Debug,
{
    /// Creates an empty queue accepting names in `[0, max_size)`
    pub fn new(max_size: usize) -> Self {
        let mut heap = Vec::with_capacity(max_size + 1);
        heap.push(0);
        IndexedPriorityQueue {
            heap,
            position: vec![None; max_size],
            priorities: vec![None; max_size],
            max_size,
        }
    }

    /// Number of names currently queued
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct names the queue can hold
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns true if `name` is queued. Names outside the capacity are never queued.
    pub fn contains(&self, name: usize) -> bool {
        name < self.max_size && self.position[name].is_some()
    }

    /// Current priority of `name`, if queued
    pub fn priority_of(&self, name: usize) -> Option<&T> {
        if self.contains(name) {
            self.priorities[name].as_ref()
        } else {
            None
        }
    }

    /// Inserts `name` with `priority`.
    ///
    /// A name that is already queued is left untouched, keeping its old
    /// priority; use [`change_key`](Self::change_key) to update it. Names
    /// outside the capacity are ignored.
    pub fn push(&mut self, priority: T, name: usize) {
        if name >= self.max_size {
            warn!("ignoring name {} outside capacity {}", name, self.max_size);
            return;
        }
        if self.contains(name) {
            return;
        }
        self.heap.push(name);
        let slot = self.len();
        self.position[name] = Some(slot);
        self.priorities[name] = Some(priority);
        self.swim(slot);
    }

    /// Sets the priority of `name`, inserting it if absent.
    ///
    /// The direction of the change is unknown, so the entry is offered to
    /// both swim and sink; at most one of them moves it.
    pub fn change_key(&mut self, priority: T, name: usize) {
        let slot = match self.slot_of(name) {
            Some(slot) => slot,
            None => return self.push(priority, name),
        };
        self.priorities[name] = Some(priority);
        self.swim(slot);
        // swim may have moved it
        if let Some(slot) = self.slot_of(name) {
            self.sink(slot);
        }
    }

    /// Removes `name` from the queue. Absent names are ignored.
    pub fn erase(&mut self, name: usize) {
        let slot = match self.slot_of(name) {
            Some(slot) => slot,
            None => return,
        };
        let last = self.len();
        if slot == last {
            self.detach_last();
            return;
        }
        self.swap_slots(slot, last);
        self.detach_last();
        self.swim(slot);
        self.sink(slot);
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(T, usize)> {
        if self.is_empty() {
            return None;
        }
        let last = self.len();
        self.swap_slots(1, last);
        let (priority, name) = self.detach_last()?;
        self.sink(1);
        Some((priority, name))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn top(&self) -> Option<(T, usize)> {
        let name = *self.heap.get(1)?;
        self.priorities[name].clone().map(|priority| (priority, name))
    }

    /// Iterates over the queued `(priority, name)` pairs in heap slot order
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.heap[1..]
            .iter()
            .filter_map(move |&name| self.priorities[name].as_ref().map(|priority| (priority, name)))
    }

    fn slot_of(&self, name: usize) -> Option<usize> {
        self.position.get(name).copied().flatten()
    }

    /// Drops the last slot, clearing the side tables of the name it held
    fn detach_last(&mut self) -> Option<(T, usize)> {
        if self.is_empty() {
            return None;
        }
        let name = self.heap.pop()?;
        self.position[name] = None;
        self.priorities[name].take().map(|priority| (priority, name))
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// `priority(heap[a]) > priority(heap[b])`
    fn greater(&self, a: usize, b: usize) -> bool {
        self.priorities[self.heap[a]] > self.priorities[self.heap[b]]
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 1 {
            let parent = slot / 2;
            if !self.greater(parent, slot) {
                return;
            }
            self.swap_slots(parent, slot);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.len();
        while 2 * slot <= len {
            let mut child = 2 * slot;
            // ties go to the left child
            if child + 1 <= len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(slot, child) {
                return;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }
}
