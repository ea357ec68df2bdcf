use crate::error::{GraphError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where an entity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Discovered source document (may also carry registry aliases)
    Document,

    /// Alias cluster with no document on disk
    Cluster,
}

/// Node in reference graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    /// Unique entity name
    pub name: String,

    pub kind: EntityKind,
}

/// Edge in reference graph: "source textually references target"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEdge;

/// Directed reference graph without self-loops or parallel edges
pub struct ReferenceGraph {
    /// Directed graph (entity -> referenced entity)
    pub graph: DiGraph<EntityNode, ReferenceEdge>,

    /// Entity name -> NodeIndex mapping for fast lookup
    name_index: HashMap<String, NodeIndex>,

    /// Fixed node ordering used for export
    order: Vec<NodeIndex>,
}

impl ReferenceGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add node to graph. Adding an existing name returns its index and
    /// keeps the original kind.
    pub fn add_node(&mut self, name: &str, kind: EntityKind) -> NodeIndex {
        if let Some(&idx) = self.name_index.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(EntityNode {
            name: name.to_string(),
            kind,
        });
        self.name_index.insert(name.to_string(), idx);
        self.order.push(idx);
        idx
    }

    /// Add edge between named nodes.
    ///
    /// Returns `false` when the edge already existed.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool> {
        if source == target {
            return Err(GraphError::SelfReference(source.to_string()));
        }
        let from = self.require(source)?;
        let to = self.require(target)?;

        if self.graph.find_edge(from, to).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(from, to, ReferenceEdge);
        Ok(true)
    }

    /// Find node by entity name
    pub fn find_node(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    /// Get node data
    pub fn get_node(&self, idx: NodeIndex) -> Option<&EntityNode> {
        self.graph.node_weight(idx)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.find_node(source), self.find_node(target)) {
            (Some(from), Some(to)) => self.graph.find_edge(from, to).is_some(),
            _ => false,
        }
    }

    /// Nodes in export order: documents in discovery order, then
    /// registry-only entities in registry order
    pub fn ordered_nodes(&self) -> impl Iterator<Item = (NodeIndex, &EntityNode)> {
        self.order
            .iter()
            .filter_map(move |&idx| self.graph.node_weight(idx).map(|node| (idx, node)))
    }

    /// Entity names in export order
    pub fn names(&self) -> Vec<&str> {
        self.ordered_nodes().map(|(_, node)| node.name.as_str()).collect()
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn require(&self, name: &str) -> Result<NodeIndex> {
        self.find_node(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }
}

impl Default for ReferenceGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = ReferenceGraph::new();
        let first = graph.add_node("CSRD", EntityKind::Document);
        let second = graph.add_node("CSRD", EntityKind::Cluster);

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_node(first).unwrap().kind, EntityKind::Document);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut graph = ReferenceGraph::new();
        graph.add_node("A", EntityKind::Document);
        graph.add_node("B", EntityKind::Cluster);

        assert!(graph.add_edge("A", "B").unwrap());
        assert!(!graph.add_edge("A", "B").unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("A", "B"));
        assert!(!graph.has_edge("B", "A"));
    }

    #[test]
    fn rejects_self_loops() {
        let mut graph = ReferenceGraph::new();
        graph.add_node("A", EntityKind::Document);

        assert!(matches!(
            graph.add_edge("A", "A"),
            Err(GraphError::SelfReference(name)) if name == "A"
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_unknown_endpoints() {
        let mut graph = ReferenceGraph::new();
        graph.add_node("A", EntityKind::Document);

        assert!(matches!(
            graph.add_edge("A", "missing"),
            Err(GraphError::NodeNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut graph = ReferenceGraph::new();
        for name in ["zeta", "alpha", "mid"] {
            graph.add_node(name, EntityKind::Document);
        }
        graph.add_node("alpha", EntityKind::Cluster);

        assert_eq!(graph.names(), vec!["zeta", "alpha", "mid"]);
    }
}
