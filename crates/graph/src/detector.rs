use crate::registry::{AliasRegistry, PreparedCluster};

/// A detected reference together with the alias that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection<'a> {
    pub target: &'a str,
    pub alias: &'a str,
}

/// Finds which registry entities a normalized text refers to.
///
/// Matching is plain substring containment on normalized text. An alias that
/// happens to occur inside an unrelated word still counts as a reference;
/// short numeric aliases such as `305-` are the usual source of false hits.
pub struct ReferenceDetector {
    clusters: Vec<PreparedCluster>,
}

impl ReferenceDetector {
    pub fn new(registry: &AliasRegistry) -> Self {
        Self {
            clusters: registry.prepare(),
        }
    }

    /// Targets referenced by `source`, in registry order.
    ///
    /// `normalized_text` must already be in search form. The source entity is
    /// never reported as its own target; the first matching alias
    /// short-circuits the remaining aliases of a cluster.
    pub fn detect<'a>(&'a self, source: &str, normalized_text: &str) -> Vec<Detection<'a>> {
        self.clusters
            .iter()
            .filter(|cluster| cluster.is_matchable() && cluster.name != source)
            .filter_map(|cluster| {
                cluster
                    .aliases
                    .iter()
                    .find(|alias| normalized_text.contains(alias.as_str()))
                    .map(|alias| Detection {
                        target: cluster.name.as_str(),
                        alias: alias.as_str(),
                    })
            })
            .collect()
    }
}
