use crate::error::{GraphError, Result};
use crate::types::ReferenceGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Bounds for the visual attributes derived from graph topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightConfig {
    /// Node diameter for entities nobody references
    pub min_width: f64,

    /// Node diameter for the most referenced entity
    pub max_width: f64,

    pub min_font_size: f64,
    pub max_font_size: f64,

    /// Target length of edges between hubs
    pub min_edge_len: f64,

    /// Target length of edges touching sparsely connected nodes
    pub max_edge_len: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            min_width: 1.5,
            max_width: 3.0,
            min_font_size: 14.0,
            max_font_size: 28.0,
            min_edge_len: 0.01,
            max_edge_len: 0.5,
        }
    }
}

impl WeightConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            ("width", self.min_width, self.max_width),
            ("font_size", self.min_font_size, self.max_font_size),
            ("edge_len", self.min_edge_len, self.max_edge_len),
        ];

        for (label, min, max) in pairs {
            if !min.is_finite() || !max.is_finite() {
                return Err(GraphError::invalid_config(format!(
                    "{label} bounds must be finite (min={min}, max={max})"
                )));
            }
            if min > max {
                return Err(GraphError::invalid_config(format!(
                    "min_{label} ({min}) cannot exceed max_{label} ({max})"
                )));
            }
        }

        if self.min_width <= 0.0 {
            return Err(GraphError::invalid_config("min_width must be > 0"));
        }
        if self.min_font_size <= 0.0 {
            return Err(GraphError::invalid_config("min_font_size must be > 0"));
        }
        if self.min_edge_len < 0.0 {
            return Err(GraphError::invalid_config("min_edge_len must be >= 0"));
        }

        Ok(())
    }
}

/// Visual attributes of one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeWeight {
    pub name: String,
    pub in_degree: usize,
    pub degree: usize,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
}

/// Visual attributes of one edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeWeight {
    pub source: String,
    pub target: String,
    pub length: f64,
}

/// Weights for every node (export order) and edge (insertion order)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphWeights {
    pub nodes: Vec<NodeWeight>,
    pub edges: Vec<EdgeWeight>,
}

impl GraphWeights {
    pub fn node(&self, name: &str) -> Option<&NodeWeight> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&EdgeWeight> {
        self.edges
            .iter()
            .find(|edge| edge.source == source && edge.target == target)
    }
}

/// Derives node size, font size and edge length from degree statistics
pub struct WeightMapper {
    config: WeightConfig,
}

impl WeightMapper {
    pub fn new(config: WeightConfig) -> Self {
        Self { config }
    }

    pub fn map(&self, graph: &ReferenceGraph) -> GraphWeights {
        let cfg = &self.config;

        let max_in_degree = graph
            .ordered_nodes()
            .map(|(idx, _)| graph.in_degree(idx))
            .max()
            .unwrap_or(0);
        let max_degree = graph
            .ordered_nodes()
            .map(|(idx, _)| graph.degree(idx))
            .max()
            .unwrap_or(0);

        let nodes = graph
            .ordered_nodes()
            .map(|(idx, node)| {
                let in_degree = graph.in_degree(idx);
                let width = self.width_for(in_degree, max_in_degree);
                NodeWeight {
                    name: node.name.clone(),
                    in_degree,
                    degree: graph.degree(idx),
                    width,
                    height: width,
                    font_size: self.font_size_for(width),
                }
            })
            .collect();

        let edges = graph
            .graph
            .edge_references()
            .filter_map(|edge| {
                let source = graph.get_node(edge.source())?;
                let target = graph.get_node(edge.target())?;
                let weaker = graph.degree(edge.source()).min(graph.degree(edge.target()));
                let rel = ratio(weaker, max_degree);
                Some(EdgeWeight {
                    source: source.name.clone(),
                    target: target.name.clone(),
                    length: lerp(cfg.min_edge_len, cfg.max_edge_len, rel),
                })
            })
            .collect();

        GraphWeights { nodes, edges }
    }

    /// Diameter grows linearly with incoming references
    pub fn width_for(&self, in_degree: usize, max_in_degree: usize) -> f64 {
        lerp(
            self.config.min_width,
            self.config.max_width,
            ratio(in_degree, max_in_degree),
        )
    }

    /// Font size at the same relative position as the width
    pub fn font_size_for(&self, width: f64) -> f64 {
        let cfg = &self.config;
        let span = cfg.max_width - cfg.min_width;
        let rel = if span > 0.0 {
            (width - cfg.min_width) / span
        } else {
            0.0
        };
        lerp(cfg.min_font_size, cfg.max_font_size, rel)
    }
}

fn ratio(value: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    }
}

fn lerp(min: f64, max: f64, rel: f64) -> f64 {
    min + (max - min) * rel
}
