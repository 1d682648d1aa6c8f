pub mod indexed_priority_queue;
pub mod priority_queue;

pub use indexed_priority_queue::IndexedPriorityQueue;
pub use priority_queue::LazyMinQueue;
