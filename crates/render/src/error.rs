use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Graphviz program {program:?} is not available: {source}")]
    GraphvizUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {status}: {stderr}")]
    LayoutFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Invalid output path: {}", .0.display())]
    InvalidOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
