use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds document files directly inside a directory
pub struct DocumentScanner {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DocumentScanner {
    pub fn new(root: impl AsRef<Path>, extensions: &[String]) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document files sorted by file name. Subdirectories are not entered.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .max_depth(Some(1))
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !self.is_document(path) {
                        log::debug!("Skipping non-document {}", path.display());
                        continue;
                    }

                    files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        log::debug!("Found {} document files in {}", files.len(), self.root.display());
        files
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|candidate| candidate == &ext)
            })
            .unwrap_or(false)
    }
}

/// Entity name of a document: its file name without extension
pub fn document_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn finds_matching_files_sorted_and_flat() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("ESRS.pdf"), b"x").unwrap();
        fs::write(root.join("CSRD.PDF"), b"x").unwrap();
        fs::write(root.join("notes.md"), b"x").unwrap();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested/NFRD.pdf"), b"x").unwrap();

        let scanner = DocumentScanner::new(root, &["pdf".to_string()]);
        let names: Vec<_> = scanner
            .scan()
            .iter()
            .filter_map(|p| document_name(p))
            .collect();

        assert_eq!(names, vec!["CSRD", "ESRS"]);
    }

    #[test]
    fn accepts_dotted_extension_config() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), b"x").unwrap();

        let scanner = DocumentScanner::new(temp.path(), &[".TXT".to_string()]);
        assert_eq!(scanner.scan().len(), 1);
    }

    #[test]
    fn document_name_is_file_stem() {
        assert_eq!(
            document_name(Path::new("/docs/DIN EN ISO 14064-1.pdf")).as_deref(),
            Some("DIN EN ISO 14064-1")
        );
    }
}
