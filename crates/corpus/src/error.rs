use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No documents found in {}", dir.display())]
    NoDocuments { dir: PathBuf },

    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    #[error("Failed to read PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },
}
