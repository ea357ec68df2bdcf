use crate::error::{CorpusError, Result};
use std::fs;
use std::path::Path;

/// Capability to pull the full raw text out of a document file
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Join per-page texts with a single newline.
///
/// Pages that failed or yielded no text contribute nothing.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// PDF text extraction page by page
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let document = lopdf::Document::load(path).map_err(|e| CorpusError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let pages = document.get_pages().into_keys().map(|page_number| {
            match document.extract_text(&[page_number]) {
                Ok(text) => Some(text),
                Err(e) => {
                    log::warn!(
                        "No text from page {page_number} of {}: {e}",
                        path.display()
                    );
                    None
                }
            }
        });

        Ok(join_pages(pages))
    }
}

/// Plain UTF-8 text documents; form feeds separate pages
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(join_pages(
            content.split('\u{c}').map(|page| Some(page.to_string())),
        ))
    }
}

/// Pick the extractor for a file by its extension
pub fn extractor_for(path: &Path) -> Result<&'static dyn TextExtractor> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let extractor: &'static dyn TextExtractor = match ext.as_str() {
        "pdf" => &PdfExtractor,
        "txt" | "text" => &PlainTextExtractor,
        other => {
            return Err(CorpusError::InvalidPath(format!(
                "{}: unsupported document type {other:?}",
                path.display()
            )))
        }
    };
    Ok(extractor)
}
