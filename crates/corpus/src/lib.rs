//! # Document Corpus
//!
//! Finds the documents of a reference analysis run and extracts their raw
//! text. Each document is named after its file stem; PDF pages are
//! extracted one by one and joined with newlines, skipping pages that
//! yield no text.

mod error;
mod extract;
mod scanner;
mod source;

pub use error::{CorpusError, Result};
pub use extract::{extractor_for, join_pages, PdfExtractor, PlainTextExtractor, TextExtractor};
pub use scanner::{document_name, DocumentScanner};
pub use source::{Document, DocumentSource};
