use crate::detector::ReferenceDetector;
use crate::error::Result;
use crate::normalize::normalize_for_search;
use crate::registry::AliasRegistry;
use crate::types::{EntityKind, ReferenceGraph};

/// Document text in search form, keyed by entity name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub name: String,
    pub text: String,
}

impl NormalizedDocument {
    /// Normalize raw extracted text once
    pub fn from_raw(name: impl Into<String>, raw_text: &str) -> Self {
        Self {
            name: name.into(),
            text: normalize_for_search(raw_text),
        }
    }
}

/// Build reference graph from documents and an alias registry
pub struct GraphBuilder<'a> {
    registry: &'a AliasRegistry,
    detector: ReferenceDetector,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(registry: &'a AliasRegistry) -> Self {
        Self {
            registry,
            detector: ReferenceDetector::new(registry),
        }
    }

    /// Build graph from normalized documents.
    ///
    /// Nodes are the documents in the given order followed by registry
    /// entities that are not documents. A document whose name matches a
    /// registry entity becomes one node carrying that entity's aliases.
    pub fn build(&self, documents: &[NormalizedDocument]) -> Result<ReferenceGraph> {
        let mut graph = ReferenceGraph::new();

        // Phase 1: nodes
        for doc in documents {
            graph.add_node(&doc.name, EntityKind::Document);
        }
        for name in self.registry.names() {
            graph.add_node(name, EntityKind::Cluster);
        }

        // Phase 2: edges
        for doc in documents {
            log::info!("Scanning: {}", doc.name);
            for detection in self.detector.detect(&doc.name, &doc.text) {
                log::debug!(
                    "{} references {} via alias {:?}",
                    doc.name,
                    detection.target,
                    detection.alias
                );
                graph.add_edge(&doc.name, detection.target)?;
            }
        }

        log::info!(
            "Built reference graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClusterEntry;
    use pretty_assertions::assert_eq;

    fn registry(entries: Vec<ClusterEntry>) -> AliasRegistry {
        AliasRegistry::new(entries).unwrap()
    }

    #[test]
    fn nodes_are_documents_then_registry_only_entities() {
        let registry = registry(vec![
            ClusterEntry::new("X", ["protocol x"]),
            ClusterEntry::new("B", ["bee"]),
            ClusterEntry::new("W", ["double u"]),
        ]);
        let docs = vec![
            NormalizedDocument::from_raw("B", "nothing"),
            NormalizedDocument::from_raw("A", "nothing"),
        ];

        let graph = GraphBuilder::new(&registry).build(&docs).unwrap();

        assert_eq!(graph.names(), vec!["B", "A", "X", "W"]);
        let b = graph.find_node("B").unwrap();
        assert_eq!(graph.get_node(b).unwrap().kind, EntityKind::Document);
        let x = graph.find_node("X").unwrap();
        assert_eq!(graph.get_node(x).unwrap().kind, EntityKind::Cluster);
    }

    #[test]
    fn two_documents_one_cluster() {
        let registry = registry(vec![ClusterEntry::new("X", ["Protocol X"])]);
        let docs = vec![
            NormalizedDocument::from_raw("A", "We follow the PROTOCOL\n  X closely."),
            NormalizedDocument::from_raw("B", "Unrelated text about A and B."),
        ];

        let graph = GraphBuilder::new(&registry).build(&docs).unwrap();

        assert!(graph.has_edge("A", "X"));
        assert!(!graph.has_edge("A", "B"));
        assert_eq!(graph.out_degree(graph.find_node("B").unwrap()), 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn document_with_own_alias_has_no_self_loop() {
        let registry = registry(vec![ClusterEntry::new("CSRD", ["CSRD", "2022/2464"])]);
        let docs = vec![NormalizedDocument::from_raw("CSRD", "Directive (EU) 2022/2464 (CSRD)")];

        let graph = GraphBuilder::new(&registry).build(&docs).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn empty_alias_document_is_source_but_never_target() {
        let registry = registry(vec![
            ClusterEntry::new("Y", Vec::<String>::new()),
            ClusterEntry::new("Z", ["zed"]),
        ]);
        let docs = vec![
            NormalizedDocument::from_raw("Y", "Y cites zed."),
            NormalizedDocument::from_raw("Q", "Q talks about Y all the time"),
        ];

        let graph = GraphBuilder::new(&registry).build(&docs).unwrap();

        assert!(graph.has_edge("Y", "Z"));
        assert_eq!(graph.in_degree(graph.find_node("Y").unwrap()), 0);
    }

    #[test]
    fn empty_input_builds_registry_nodes_only() {
        let registry = registry(vec![ClusterEntry::new("X", ["x"])]);
        let graph = GraphBuilder::new(&registry).build(&[]).unwrap();

        assert_eq!(graph.names(), vec!["X"]);
        assert_eq!(graph.edge_count(), 0);
    }
}
