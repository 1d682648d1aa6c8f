//! Plain-text graph input.
//!
//! The format is a whitespace separated token stream: the vertex count
//! followed by `origin destination weight` triples, conventionally one per
//! line. Weights are read as `f64` and converted with [`Weight::from_f64`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::graph::directed::WeightedDigraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::weight::Weight;
use crate::{Error, Result};

impl<W> WeightedDigraph<W>
where
    W: Weight,
{
    /// Reads a graph from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(|token| (index + 1, token.to_string())));
        }
        let mut tokens = tokens.into_iter();

        let vertices = match tokens.next() {
            Some((line, token)) => parse_vertex(line, &token)?,
            None => return Err(Error::MalformedInput("missing vertex count".to_string())),
        };
        let mut graph = WeightedDigraph::new(vertices);

        while let Some((line, origin)) = tokens.next() {
            let (destination, weight) = match (tokens.next(), tokens.next()) {
                (Some((_, destination)), Some((_, weight))) => (destination, weight),
                _ => {
                    return Err(Error::MalformedInput(format!(
                        "line {}: incomplete edge starting at `{}`",
                        line, origin
                    )))
                }
            };
            let from = parse_vertex(line, &origin)?;
            let to = parse_vertex(line, &destination)?;
            let weight: f64 = weight.parse().map_err(|_| {
                Error::MalformedInput(format!("line {}: expected a weight, found `{}`", line, weight))
            })?;
            graph.add_edge(from, to, W::from_f64(weight))?;
        }

        debug!(
            "loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Reads a graph from a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a graph from a file, falling back to the empty graph when the
    /// file cannot be read or parsed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(graph) => graph,
            Err(err) => {
                warn!("{} could not be loaded: {}", path.as_ref().display(), err);
                WeightedDigraph::default()
            }
        }
    }
}

fn parse_vertex(line: usize, token: &str) -> Result<usize> {
    token.parse().map_err(|_| {
        Error::MalformedInput(format!("line {}: expected a vertex id, found `{}`", line, token))
    })
}
