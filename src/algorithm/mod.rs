pub mod traits;
pub mod dijkstra;
pub mod lazy;
pub mod eager;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
