use anyhow::{anyhow, bail, Context, Result};
use refnet_graph::{
    AliasRegistry, ClusterEntry, WeightConfig, DEFAULT_DELIMITER, DEFAULT_LABEL_MAX_CHARS,
};
use refnet_render::{LayoutHints, RenderStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration shipped with the binary
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Static run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub label: LabelConfig,
    pub style: RenderStyle,
    pub layout: LayoutHints,
    pub weights: WeightConfig,
    pub matrix: MatrixConfig,

    /// Alias registry, in registry order
    pub clusters: Vec<ClusterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the source documents (not searched recursively)
    pub documents_dir: PathBuf,

    /// File extensions treated as documents
    pub document_extensions: Vec<String>,

    pub figure_dir: PathBuf,
    pub figure_file: String,
    pub matrix_dir: PathBuf,
    pub matrix_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from("documents"),
            document_extensions: vec!["pdf".to_string()],
            figure_dir: PathBuf::from("output"),
            figure_file: "reference_network.svg".to_string(),
            matrix_dir: PathBuf::from("output"),
            matrix_file: "reference_matrix.csv".to_string(),
        }
    }
}

impl PathsConfig {
    pub fn figure_path(&self) -> PathBuf {
        self.figure_dir.join(&self.figure_file)
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.matrix_dir.join(&self.matrix_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// Character budget per label line
    pub max_chars: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_LABEL_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    /// Field separator; entity names must not contain it
    pub delimiter: char,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl AppConfig {
    /// Configuration shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Built-in configuration is invalid")
    }

    /// Load from `path`, or the built-in configuration when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::builtin();
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|err| anyhow!("{err}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.registry()?;

        if self.label.max_chars == 0 {
            bail!("label.max_chars must be > 0");
        }
        if matches!(self.matrix.delimiter, '\n' | '\r') {
            bail!("matrix.delimiter must not be a line break");
        }
        if self.paths.document_extensions.is_empty() {
            bail!("paths.document_extensions must list at least one extension");
        }
        if self.paths.figure_file.trim().is_empty() || self.paths.matrix_file.trim().is_empty() {
            bail!("paths.figure_file and paths.matrix_file must not be empty");
        }
        if self.layout.program.trim().is_empty() {
            bail!("layout.program must not be empty");
        }

        Ok(())
    }

    /// Validated alias registry
    pub fn registry(&self) -> Result<AliasRegistry> {
        Ok(AliasRegistry::new(self.clusters.clone())?)
    }
}
