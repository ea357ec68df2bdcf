use crate::error::{CorpusError, Result};
use crate::extract::extractor_for;
use crate::scanner::{document_name, DocumentScanner};
use std::path::{Path, PathBuf};

/// A discovered document with its raw extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Entity name (file stem)
    pub name: String,

    pub path: PathBuf,

    pub text: String,
}

/// Enumerates a document directory and reads every document's text
pub struct DocumentSource {
    scanner: DocumentScanner,
}

impl DocumentSource {
    pub fn new(dir: impl AsRef<Path>, extensions: &[String]) -> Self {
        Self {
            scanner: DocumentScanner::new(dir, extensions),
        }
    }

    /// Document names and paths in discovery order.
    ///
    /// Fails with [`CorpusError::NoDocuments`] when nothing matches.
    pub fn discover(&self) -> Result<Vec<(String, PathBuf)>> {
        let files = self.scanner.scan();
        if files.is_empty() {
            return Err(CorpusError::NoDocuments {
                dir: self.scanner.root().to_path_buf(),
            });
        }

        files
            .into_iter()
            .map(|path| {
                let name = document_name(&path).ok_or_else(|| {
                    CorpusError::InvalidPath(format!("{} has no usable file name", path.display()))
                })?;
                Ok((name, path))
            })
            .collect()
    }

    /// Discover and read all documents
    pub fn load(&self) -> Result<Vec<Document>> {
        let found = self.discover()?;

        log::info!("Found documents:");
        for (name, _) in &found {
            log::info!("  - {name}");
        }

        found
            .into_iter()
            .map(|(name, path)| {
                log::info!("Reading: {}", path.display());
                let text = extractor_for(&path)?.extract_text(&path)?;
                Ok(Document { name, path, text })
            })
            .collect()
    }
}
