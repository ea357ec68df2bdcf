use refnet_graph::{EdgeWeight, NodeWeight};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Document entities in discovery order
    pub documents: Vec<String>,

    /// All entities in matrix order with degrees and visual weights
    pub nodes: Vec<NodeWeight>,

    /// Detected references with target edge lengths
    pub edges: Vec<EdgeWeight>,

    pub matrix_path: PathBuf,
    pub figure_path: Option<PathBuf>,
    pub dot_path: Option<PathBuf>,
}

impl RunReport {
    pub fn render_summary(&self) -> String {
        let mut text = format!(
            "{} documents, {} entities, {} references\n",
            self.documents.len(),
            self.nodes.len(),
            self.edges.len()
        );
        text.push_str(&format!("Matrix: {}\n", self.matrix_path.display()));
        if let Some(dot) = &self.dot_path {
            text.push_str(&format!("DOT: {}\n", dot.display()));
        }
        match &self.figure_path {
            Some(figure) => text.push_str(&format!("Figure: {}", figure.display())),
            None => text.push_str("Figure: skipped"),
        }
        text
    }
}

/// Result of `refnet doctor`
#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorReport {
    pub config_ok: bool,
    pub config_error: Option<String>,
    pub clusters: usize,
    pub graphviz_program: Option<String>,
    pub graphviz_ok: bool,
    pub graphviz_version: Option<String>,
    pub graphviz_error: Option<String>,
}

impl DoctorReport {
    pub fn ok(&self) -> bool {
        self.config_ok && self.graphviz_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_skipped_figure() {
        let report = RunReport {
            documents: vec!["A".to_string()],
            nodes: Vec::new(),
            edges: Vec::new(),
            matrix_path: PathBuf::from("out/m.csv"),
            figure_path: None,
            dot_path: None,
        };

        let summary = report.render_summary();
        assert!(summary.starts_with("1 documents, 0 entities, 0 references"));
        assert!(summary.ends_with("Figure: skipped"));
    }
}
