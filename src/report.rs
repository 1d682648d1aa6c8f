use std::fmt;
use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm};
use crate::config::{CheckConfig, Variant};
use crate::graph::{Graph, WeightedDigraph};
use crate::verify::{certify, path_lengths_from_root, Certificate};
use crate::weight::Weight;
use crate::{EagerDijkstra, LazyDijkstra, Result};

/// Outcome of one search variant on one graph
#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub algorithm: &'static str,
    pub reachable: usize,
    pub tree_edges: usize,
    pub stats: SearchStats,
    pub certificate: Certificate,
    pub elapsed_micros: u128,
}

/// Outcome of a checking run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub graph: String,
    pub vertices: usize,
    pub edges: usize,
    pub source: usize,
    pub selection: Variant,
    pub negative_weights: bool,
    pub variants: Vec<VariantReport>,
    /// Whether both variants' trees give identical root distances;
    /// `None` unless both ran and produced well-formed trees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances_agree: Option<bool>,
}

impl RunReport {
    /// True when every tree was certified and the variants agree
    pub fn all_valid(&self) -> bool {
        self.variants.iter().all(|v| v.certificate.is_valid()) && self.distances_agree != Some(false)
    }
}

/// Runs the variants selected by `config` on `graph` and certifies every tree
pub fn run_check<W: Weight>(graph: &WeightedDigraph<W>, config: &CheckConfig) -> Result<RunReport> {
    let mut variants = Vec::new();
    let mut lengths = Vec::new();

    if config.variant.runs_lazy() {
        let (report, tree) = run_variant(&LazyDijkstra::new(), graph, config.source)?;
        if report.certificate.tree_shape {
            lengths.push(path_lengths_from_root(&tree, config.source)?);
        }
        variants.push(report);
    }
    if config.variant.runs_eager() {
        let (report, tree) = run_variant(&EagerDijkstra::new(), graph, config.source)?;
        if report.certificate.tree_shape {
            lengths.push(path_lengths_from_root(&tree, config.source)?);
        }
        variants.push(report);
    }

    let distances_agree = match lengths.as_slice() {
        [lazy, eager] if variants.len() == 2 => Some(lazy == eager),
        _ => None,
    };

    Ok(RunReport {
        graph: config.graph_path.display().to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        source: config.source,
        selection: config.variant,
        negative_weights: graph.has_negative_weight(),
        variants,
        distances_agree,
    })
}

fn run_variant<W, A>(
    algorithm: &A,
    graph: &WeightedDigraph<W>,
    source: usize,
) -> Result<(VariantReport, WeightedDigraph<W>)>
where
    W: Weight,
    A: ShortestPathAlgorithm<W, WeightedDigraph<W>>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let elapsed = start.elapsed();

    let tree = result.tree(graph)?;
    let certificate = certify(&tree, graph, source)?;
    info!(
        "{}: {} tree edges in {:?}, certified: {}",
        algorithm.name(),
        tree.edge_count(),
        elapsed,
        certificate.is_valid()
    );

    let report = VariantReport {
        algorithm: algorithm.name(),
        reachable: (0..graph.vertex_count()).filter(|&v| result.is_reachable(v)).count(),
        tree_edges: tree.edge_count(),
        stats: result.stats,
        certificate,
        elapsed_micros: elapsed.as_micros(),
    };
    Ok((report, tree))
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "FAILED"
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} vertices, {} edges, source {}, variants {}",
            self.graph, self.vertices, self.edges, self.source, self.selection
        )?;
        if self.negative_weights {
            writeln!(f, "warning: negative edge weights, trees may not be optimal")?;
        }
        for variant in &self.variants {
            writeln!(f, "{}", variant.algorithm)?;
            writeln!(
                f,
                "  reachable {}, tree edges {}, {} us",
                variant.reachable, variant.tree_edges, variant.elapsed_micros
            )?;
            writeln!(
                f,
                "  queue: offered {}, popped {}, stale {}, peak {}",
                variant.stats.offered, variant.stats.popped, variant.stats.stale, variant.stats.peak_len
            )?;
            writeln!(
                f,
                "  subgraph {}, tree {}, relaxed {}",
                verdict(variant.certificate.subgraph),
                verdict(variant.certificate.tree_shape),
                verdict(variant.certificate.edges_relaxed)
            )?;
        }
        if let Some(agree) = self.distances_agree {
            writeln!(f, "variants agree: {}", verdict(agree))?;
        }
        Ok(())
    }
}
