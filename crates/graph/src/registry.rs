use crate::error::{GraphError, Result};
use crate::normalize::normalize_for_search;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One named cluster of aliases as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterEntry {
    /// Entity name (graph node label)
    pub name: String,

    /// Alias strings whose presence in a document marks a reference
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ClusterEntry {
    pub fn new<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cluster with aliases in search form, blank aliases dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCluster {
    pub name: String,
    pub aliases: Vec<String>,
}

impl PreparedCluster {
    /// A cluster without usable aliases can never be a reference target
    pub fn is_matchable(&self) -> bool {
        !self.aliases.is_empty()
    }
}

/// Ordered, validated mapping from entity name to alias list
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: Vec<ClusterEntry>,
}

impl AliasRegistry {
    /// Build the registry, rejecting empty and duplicate entity names.
    /// Entry order is preserved.
    pub fn new(entries: Vec<ClusterEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(GraphError::EmptyEntityName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(GraphError::DuplicateEntity(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Entity names in registry order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Normalize every alias once for matching
    pub fn prepare(&self) -> Vec<PreparedCluster> {
        self.entries
            .iter()
            .map(|entry| PreparedCluster {
                name: entry.name.clone(),
                aliases: entry
                    .aliases
                    .iter()
                    .filter(|alias| !alias.trim().is_empty())
                    .map(|alias| normalize_for_search(alias))
                    .filter(|alias| !alias.is_empty())
                    .collect(),
            })
            .collect()
    }
}
