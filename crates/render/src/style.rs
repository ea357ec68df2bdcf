use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Node and edge appearance shared by every element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    pub node_fill_color: String,
    pub node_edge_color: String,
    pub edge_color: String,
    pub font_family: String,

    /// Default font size; per-node sizes override it
    pub font_size: f64,

    pub arrow_size: f64,
    pub pen_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_fill_color: "white".to_string(),
            node_edge_color: "#3D6A93".to_string(),
            edge_color: "#3D6A93".to_string(),
            font_family: "Calibri".to_string(),
            font_size: 10.0,
            arrow_size: 0.8,
            pen_width: 1.1,
        }
    }
}

/// Graph-level layout hints and the Graphviz program to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutHints {
    /// Force-directed layout engine
    pub program: String,

    /// Directory holding the Graphviz executables, if not on PATH
    pub binary_dir: Option<PathBuf>,

    /// Output format passed as `-T<format>`
    pub format: String,

    pub overlap: String,
    pub sep: String,
    pub splines: String,
    pub output_order: String,

    /// Spring constant (`K`)
    pub k: f64,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            program: "sfdp".to_string(),
            binary_dir: None,
            format: "svg".to_string(),
            overlap: "prism".to_string(),
            sep: "+3".to_string(),
            splines: "true".to_string(),
            output_order: "edgesfirst".to_string(),
            k: 0.07,
        }
    }
}
