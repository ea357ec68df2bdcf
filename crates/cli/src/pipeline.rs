use crate::config::AppConfig;
use crate::report::RunReport;
use anyhow::{Context, Result};
use refnet_corpus::DocumentSource;
use refnet_graph::{AdjacencyMatrix, GraphBuilder, NormalizedDocument, WeightMapper};
use refnet_render::{DotWriter, Graphviz};
use std::fs;
use std::path::PathBuf;

/// Per-run choices that are not part of the static configuration
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub matrix_path: PathBuf,
    pub figure_path: PathBuf,

    /// Run the Graphviz layout program
    pub render: bool,

    /// Also write the DOT source here
    pub dot_path: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            matrix_path: config.paths.matrix_path(),
            figure_path: config.paths.figure_path(),
            render: true,
            dot_path: None,
        }
    }
}

/// Documents -> normalized texts -> reference graph -> matrix, weights, drawing
pub fn run(config: &AppConfig, options: &RunOptions) -> Result<RunReport> {
    let registry = config.registry()?;

    let graphviz = if options.render {
        let graphviz = Graphviz::new(&config.layout);
        graphviz
            .check_available()
            .context("Graphviz is required for rendering (use --no-render to skip)")?;
        Some(graphviz)
    } else {
        None
    };

    let documents = DocumentSource::new(
        &config.paths.documents_dir,
        &config.paths.document_extensions,
    )
    .load()
    .context("Failed to load documents")?;

    let normalized: Vec<NormalizedDocument> = documents
        .iter()
        .map(|doc| NormalizedDocument::from_raw(doc.name.clone(), &doc.text))
        .collect();

    let graph = GraphBuilder::new(&registry).build(&normalized)?;

    log::info!("Found references:");
    for (source, target) in graph.edge_names() {
        log::info!("  {source}  -->  {target}");
    }

    let matrix = AdjacencyMatrix::from_graph(&graph);
    matrix
        .write_to_path(&options.matrix_path, config.matrix.delimiter)
        .with_context(|| format!("Failed to write matrix {}", options.matrix_path.display()))?;
    log::info!("Matrix with sums saved to {}", options.matrix_path.display());

    let weights = WeightMapper::new(config.weights.clone()).map(&graph);
    let dot = DotWriter::new(&config.style, &config.layout, config.label.max_chars).write(&weights);

    if let Some(dot_path) = &options.dot_path {
        if let Some(parent) = dot_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(dot_path, &dot)
            .with_context(|| format!("Failed to write DOT {}", dot_path.display()))?;
        log::info!("DOT source saved to {}", dot_path.display());
    }

    let figure_path = match &graphviz {
        Some(graphviz) => {
            graphviz
                .render(&dot, &options.figure_path)
                .with_context(|| format!("Failed to render {}", options.figure_path.display()))?;
            Some(options.figure_path.clone())
        }
        None => {
            log::info!("Rendering skipped");
            None
        }
    };

    Ok(RunReport {
        documents: documents.into_iter().map(|doc| doc.name).collect(),
        nodes: weights.nodes,
        edges: weights.edges,
        matrix_path: options.matrix_path.clone(),
        figure_path,
        dot_path: options.dot_path.clone(),
    })
}
