pub mod traits;
pub mod directed;
pub mod generators;
mod loader;

pub use traits::{Graph, MutableGraph};
pub use directed::WeightedDigraph;
