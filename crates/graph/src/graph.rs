use crate::types::ReferenceGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

impl ReferenceGraph {
    /// Number of entities that reference this node
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .count()
    }

    /// Number of entities this node references
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .count()
    }

    /// In-degree plus out-degree
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// All edges as (source, target) names, in insertion order
    pub fn edge_names(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let source = self.get_node(edge.source())?;
                let target = self.get_node(edge.target())?;
                Some((source.name.as_str(), target.name.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{EntityKind, ReferenceGraph};
    use pretty_assertions::assert_eq;

    fn sample() -> ReferenceGraph {
        let mut graph = ReferenceGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(name, EntityKind::Document);
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("C", "B").unwrap();
        graph
    }

    #[test]
    fn degrees_count_both_directions() {
        let graph = sample();
        let a = graph.find_node("A").unwrap();
        let b = graph.find_node("B").unwrap();
        let c = graph.find_node("C").unwrap();

        assert_eq!((graph.in_degree(a), graph.out_degree(a), graph.degree(a)), (0, 2, 2));
        assert_eq!((graph.in_degree(b), graph.out_degree(b), graph.degree(b)), (2, 0, 2));
        assert_eq!((graph.in_degree(c), graph.out_degree(c), graph.degree(c)), (1, 1, 2));
    }

    #[test]
    fn edge_names_follow_insertion_order() {
        let graph = sample();
        assert_eq!(graph.edge_names(), vec![("A", "B"), ("A", "C"), ("C", "B")]);
    }
}
