//! sssp_check - Single-Source Shortest Path Trees with Optimality Certificates
//!
//! This library builds shortest-path trees over weighted directed graphs with two
//! variants of Dijkstra's algorithm: a lazy one that re-inserts vertices into an
//! ordinary min-queue, and an eager one that uses an indexed priority queue with
//! decrease-key.
//!
//! Every produced tree can be checked independently by the verifier suite in
//! [`verify`], which tests subgraph containment, tree shape and the classical
//! edge-relaxation optimality certificate.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod instrument;
pub mod report;
pub mod verify;
pub mod weight;

pub use algorithm::{
    eager::EagerDijkstra, lazy::LazyDijkstra, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::IndexedPriorityQueue;
/// Re-export main types for convenient use
pub use graph::directed::WeightedDigraph;
pub use verify::{all_edges_relaxed, is_subgraph, is_tree_plus_isolated, path_lengths_from_root};
pub use weight::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("No edge from {0} to {1}")]
    EdgeNotFound(usize, usize),

    #[error("Distance to vertex {0} does not fit the weight type")]
    DistanceOverflow(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Malformed graph input: {0}")]
    MalformedInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
